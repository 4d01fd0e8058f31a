use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::WithRejection;
use folio_core::session::{page_key, parse_offset};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::session::scroll_cookie;

#[derive(Debug, Deserialize)]
pub struct ScrollForm {
    pub page: String,
    pub offset: String,
}

/// POST /session/scroll
///
/// Records a page's scroll offset in a session cookie. Sent by the client
/// before it navigates away.
pub async fn save_scroll(
    WithRejection(Form(form), _): WithRejection<Form<ScrollForm>, AppError>,
) -> AppResult<Response> {
    let page = page_key(&form.page)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid page key '{}'", form.page)))?;
    let offset = parse_offset(&form.offset)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid scroll offset '{}'", form.offset)))?;

    tracing::trace!(%page, offset, "Saving scroll offset");
    let jar = CookieJar::new().add(scroll_cookie(&page, offset));
    Ok((StatusCode::NO_CONTENT, jar).into_response())
}

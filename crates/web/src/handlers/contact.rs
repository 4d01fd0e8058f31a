//! Contact form submission.
//!
//! Success redirects to `/#contact` with a notice, so a reload does not
//! resubmit. Failures re-render the home page with the input kept.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::WithRejection;
use folio_core::contact::{self, ContactError, ContactForm};
use folio_core::notice::Notice;
use folio_core::session::Entrance;

use crate::config::ContactChannelKind;
use crate::error::AppError;
use crate::handlers::{home, redirect_with_notice, PageNotices};
use crate::state::AppState;

/// POST /contact
pub async fn submit_table(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<ContactForm>, AppError>,
) -> Response {
    submit(state, ContactChannelKind::Table, form).await
}

/// POST /contact/relay
pub async fn submit_relay(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<ContactForm>, AppError>,
) -> Response {
    submit(state, ContactChannelKind::Relay, form).await
}

async fn submit(
    state: AppState,
    kind: ContactChannelKind,
    form: ContactForm,
) -> Response {
    let channel = state.channel(kind);
    let (notice, status) = match contact::submit(channel, &form).await {
        Ok(()) => {
            tracing::info!(channel = channel.name(), "Contact message delivered");
            return redirect_with_notice("/#contact", Notice::ContactSent);
        }
        Err(ContactError::Invalid(reason)) => {
            tracing::info!(channel = channel.name(), %reason, "Contact form rejected");
            (Notice::ContactInvalid, StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(err @ ContactError::Delivery { .. }) => {
            tracing::warn!(error = %err, "Contact delivery failed");
            (Notice::ContactFailed, StatusCode::BAD_GATEWAY)
        }
    };

    let mut notices = PageNotices::default();
    notices.push(notice);
    home::render(&state, Entrance::STILL, notices, &form)
        .await
        .status(status)
        .into_response()
}

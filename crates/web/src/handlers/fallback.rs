use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::views;

/// Catch-all for unmatched paths.
pub async fn not_found(uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "No route for path");
    let markup = views::error::not_found(uri.path());
    (StatusCode::NOT_FOUND, Html(markup.into_string())).into_response()
}

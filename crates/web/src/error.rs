use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Page loads never fail as a whole (each read falls back to an empty state
/// with a notice), so what remains are malformed requests. Implements
/// [`IntoResponse`] to render the HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A form body that could not be extracted. Used as the rejection of
    /// `WithRejection<Form<_>, AppError>`.
    #[error(transparent)]
    Form(#[from] FormRejection),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status code and the message safe to show the visitor.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Form(rejection) => {
                tracing::debug!(error = %rejection, "Form rejected");
                (rejection.status(), rejection.body_text())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = views::error::page(status, &message);
        (status, Html(body.into_string())).into_response()
    }
}

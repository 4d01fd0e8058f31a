pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Site pages and form endpoints.
///
/// ```text
/// GET  /                                   home
/// GET  /projects                           featured projects
/// GET  /project/{id}                       project detail
/// GET  /studio/{id}                        studio page
/// GET  /studio/{id}/content/{content_id}   studio page, overlay open
/// GET  /art                                gallery (?filter=)
/// GET  /social                             photo + video feeds
/// POST /contact                            contact form -> table
/// POST /contact/relay                      contact form -> email relay
/// POST /session/scroll                     save scroll offset
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/projects", get(handlers::projects::list))
        .route("/project/{id}", get(handlers::projects::detail))
        .route("/studio/{id}", get(handlers::studio::page))
        .route(
            "/studio/{id}/content/{content_id}",
            get(handlers::studio::content),
        )
        .route("/art", get(handlers::art::page))
        .route("/social", get(handlers::social::page))
        .route("/contact", post(handlers::contact::submit_table))
        .route("/contact/relay", post(handlers::contact::submit_relay))
        .route("/session/scroll", post(handlers::session::save_scroll))
}

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use folio_core::notice::Notice;
use folio_remote::repositories::ProjectRepo;

use crate::handlers::{current_year, redirect_with_notice, PageNotices, PageResponse};
use crate::loader::PageLoader;
use crate::session::Cookies;
use crate::state::AppState;
use crate::views;

/// GET /projects
pub async fn list(State(state): State<AppState>, cookies: Cookies) -> Response {
    let mut notices = PageNotices::from_cookies(&cookies);
    let loader = PageLoader::new();
    let client = state.content.clone();
    let projects = loader
        .spawn("featured_projects", async move {
            ProjectRepo::list_featured(&client, None).await
        })
        .or_default(notices.list_mut(), Notice::ProjectsLoadFailed)
        .await;

    let markup = views::projects::page(
        &state.config.site_owner,
        current_year(),
        &projects,
        notices.as_slice(),
    );
    PageResponse::new(markup, &notices).into_response()
}

/// GET /project/{id}
///
/// A missing or unreadable project sends the visitor home with a notice.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    cookies: Cookies,
) -> Response {
    let notices = PageNotices::from_cookies(&cookies);
    let loader = PageLoader::new();
    let client = state.content.clone();
    let lookup = {
        let id = id.clone();
        loader.spawn("project", async move { ProjectRepo::find_by_id(&client, &id).await })
    };

    let project = match lookup.join().await {
        Ok(Some(project)) => project,
        Ok(None) => {
            tracing::warn!(%id, "Project not found, redirecting home");
            return redirect_with_notice("/", Notice::ProjectLoadFailed);
        }
        Err(e) => {
            tracing::warn!(%id, error = %e, "Project load failed, redirecting home");
            return redirect_with_notice("/", Notice::ProjectLoadFailed);
        }
    };

    let markup = views::project::page(
        &state.config.site_owner,
        current_year(),
        &project,
        notices.as_slice(),
    );
    PageResponse::new(markup, &notices).into_response()
}

//! Studio page and its addressable content overlay.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use folio_core::carousel::{adjacent, Carousel, Direction};
use folio_core::notice::Notice;
use folio_remote::models::studio::Studio;
use folio_remote::models::studio_content::StudioContent;
use folio_remote::repositories::{StudioContentRepo, StudioRepo};
use serde::Deserialize;

use crate::handlers::{current_year, redirect_with_notice, PageNotices, PageResponse};
use crate::loader::PageLoader;
use crate::session::Cookies;
use crate::state::AppState;
use crate::views::studio::{self, ModalView, StudioView};

#[derive(Debug, Default, Deserialize)]
pub struct ImageQuery {
    /// Carousel position; out-of-range values wrap.
    pub img: Option<String>,
}

impl ImageQuery {
    /// Requested image index. Anything unparsable means the first image.
    pub fn index(&self) -> usize {
        self.img
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// GET /studio/{id}
pub async fn page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    cookies: Cookies,
) -> Response {
    let notices = PageNotices::from_cookies(&cookies);
    match load(&state, &slug, notices).await {
        Ok((studio, content, notices)) => render(&state, &studio, &content, None, notices),
        Err(redirect) => redirect,
    }
}

/// GET /studio/{id}/content/{content_id}
pub async fn content(
    State(state): State<AppState>,
    Path((slug, content_id)): Path<(String, String)>,
    Query(query): Query<ImageQuery>,
    cookies: Cookies,
) -> Response {
    let notices = PageNotices::from_cookies(&cookies);
    let (studio, content, notices) = match load(&state, &slug, notices).await {
        Ok(loaded) => loaded,
        Err(redirect) => return redirect,
    };

    let Some(item) = content.iter().find(|c| c.id == content_id) else {
        tracing::warn!(%slug, %content_id, "Unknown studio content, closing overlay");
        return Redirect::to(&format!("/studio/{slug}")).into_response();
    };

    let ids: Vec<&str> = content.iter().map(|c| c.id.as_str()).collect();
    let modal = ModalView {
        item,
        carousel: Carousel::new(query.index(), item.images.len()),
        prev_id: adjacent(&ids, content_id.as_str(), Direction::Prev),
        next_id: adjacent(&ids, content_id.as_str(), Direction::Next),
    };
    render(&state, &studio, &content, Some(modal), notices)
}

/// Studio row plus its releases, or a redirect home if the studio is
/// unavailable. Failing to load releases only costs the content grid.
async fn load(
    state: &AppState,
    slug: &str,
    mut notices: PageNotices,
) -> Result<(Studio, Vec<StudioContent>, PageNotices), Response> {
    let loader = PageLoader::new();

    let client = state.content.clone();
    let owned = slug.to_string();
    let studio = loader.spawn("studio", async move { StudioRepo::find_by_slug(&client, &owned).await });

    let client = state.content.clone();
    let owned = slug.to_string();
    let content = loader.spawn("studio_content", async move {
        StudioContentRepo::list_by_studio(&client, &owned).await
    });

    let studio = match studio.join().await {
        Ok(Some(studio)) => studio,
        Ok(None) => {
            tracing::warn!(%slug, "Studio not found, redirecting home");
            return Err(redirect_with_notice("/", Notice::StudioLoadFailed));
        }
        Err(e) => {
            tracing::warn!(%slug, error = %e, "Studio load failed, redirecting home");
            return Err(redirect_with_notice("/", Notice::StudioLoadFailed));
        }
    };
    let content = content
        .or_default(notices.list_mut(), Notice::ContentLoadFailed)
        .await;

    Ok((studio, content, notices))
}

fn render(
    state: &AppState,
    studio: &Studio,
    content: &[StudioContent],
    modal: Option<ModalView<'_>>,
    notices: PageNotices,
) -> Response {
    let view = StudioView {
        owner: &state.config.site_owner,
        year: current_year(),
        studio,
        content,
        modal,
    };
    let markup = studio::page(&view, notices.as_slice());
    PageResponse::new(markup, &notices).into_response()
}

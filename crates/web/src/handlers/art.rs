use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use folio_core::gallery::GalleryFilter;
use folio_core::notice::Notice;
use folio_remote::repositories::GalleryRepo;
use serde::Deserialize;

use crate::handlers::{current_year, PageNotices, PageResponse};
use crate::loader::PageLoader;
use crate::session::Cookies;
use crate::state::AppState;
use crate::views::art::{self, ArtView};

#[derive(Debug, Default, Deserialize)]
pub struct ArtQuery {
    pub filter: Option<String>,
}

/// GET /art
///
/// The model feed and the gallery table load concurrently; either can fail
/// without taking the other down.
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<ArtQuery>,
    cookies: Cookies,
) -> Response {
    let filter = GalleryFilter::from_query(query.filter.as_deref());
    let mut notices = PageNotices::from_cookies(&cookies);

    let loader = PageLoader::new();
    let models = loader.spawn_feed(state.feeds.models.clone());
    let client = state.content.clone();
    let gallery = loader.spawn("art_gallery", async move { GalleryRepo::list(&client).await });

    let models = models
        .or_default(notices.list_mut(), Notice::FeedLoadFailed)
        .await;
    let gallery = gallery
        .or_default(notices.list_mut(), Notice::GalleryLoadFailed)
        .await;
    tracing::debug!(
        filter = filter.slug(),
        models = models.len(),
        gallery = gallery.len(),
        "Art page loaded"
    );

    let view = ArtView {
        owner: &state.config.site_owner,
        year: current_year(),
        filter,
        models: &models,
        gallery: &gallery,
    };
    let markup = art::page(&view, notices.as_slice());
    PageResponse::new(markup, &notices).into_response()
}

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use folio_core::notice::Notice;

use crate::handlers::{current_year, PageNotices, PageResponse};
use crate::loader::PageLoader;
use crate::session::Cookies;
use crate::state::AppState;
use crate::views::social::{self, SocialView};

/// GET /social
pub async fn page(State(state): State<AppState>, cookies: Cookies) -> Response {
    let mut notices = PageNotices::from_cookies(&cookies);

    let loader = PageLoader::new();
    let photos = loader.spawn_feed(state.feeds.photos.clone());
    let videos = loader.spawn_feed(state.feeds.videos.clone());

    let photos = photos
        .or_default(notices.list_mut(), Notice::FeedLoadFailed)
        .await;
    let videos = videos
        .or_default(notices.list_mut(), Notice::FeedLoadFailed)
        .await;

    let view = SocialView {
        owner: &state.config.site_owner,
        year: current_year(),
        photos: &photos,
        videos: &videos,
    };
    let markup = social::page(&view, notices.as_slice());
    PageResponse::new(markup, &notices).into_response()
}

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use folio_core::contact::ContactForm;
use folio_core::notice::Notice;
use folio_core::session::Entrance;
use folio_remote::repositories::ProjectRepo;

use crate::handlers::{current_year, NavQuery, PageNotices, PageResponse};
use crate::loader::PageLoader;
use crate::session::{intro_cookie, navigation_kind, Cookies};
use crate::state::AppState;
use crate::views::home::{self, HomeView};

/// Number of featured projects on the home page.
pub const FEATURED_LIMIT: usize = 4;

/// GET /
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<NavQuery>,
    headers: HeaderMap,
    cookies: Cookies,
) -> Response {
    let navigation = navigation_kind(&headers, query.nav.as_deref());
    let entrance = Entrance::decide(
        cookies.lifecycle(),
        navigation,
        cookies.scroll_offset("home"),
    );
    tracing::debug!(?navigation, ?entrance, "Home entrance");

    let notices = PageNotices::from_cookies(&cookies);
    render(&state, entrance, notices, &ContactForm::default())
        .await
        .into_response()
}

/// Render the home page with `form` prefilled.
///
/// Shared by `GET /` and the contact handlers, which re-render with the
/// visitor's input kept after a failed submission.
pub(crate) async fn render(
    state: &AppState,
    entrance: Entrance,
    mut notices: PageNotices,
    form: &ContactForm,
) -> PageResponse {
    let loader = PageLoader::new();
    let client = state.content.clone();
    let projects = loader
        .spawn("featured_projects", async move {
            ProjectRepo::list_featured(&client, Some(FEATURED_LIMIT)).await
        })
        .or_default(notices.list_mut(), Notice::ProjectsLoadFailed)
        .await;

    let config = &state.config;
    let view = HomeView {
        owner: &config.site_owner,
        year: current_year(),
        entrance,
        projects: &projects,
        form,
        form_action: config.contact_channel.action(),
    };
    let markup = home::page(&view, notices.as_slice());

    let response = PageResponse::new(markup, &notices);
    if entrance.set_marker {
        response.cookie(intro_cookie())
    } else {
        response
    }
}

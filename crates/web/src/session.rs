//! Cookie-backed session state: the intro marker, per-page scroll offsets
//! and the one-shot notice carried across a redirect.
//!
//! | Cookie                | Value          | Lifetime              |
//! |-----------------------|----------------|-----------------------|
//! | `folio_intro`         | `1`            | browser session       |
//! | `folio_scroll_{page}` | offset in px   | browser session       |
//! | `folio_notice`        | notice code    | cleared once rendered |

use std::borrow::Cow;
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::CACHE_CONTROL;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use folio_core::notice::Notice;
use folio_core::session::{page_key, parse_offset, Lifecycle, NavigationKind};

pub const INTRO_COOKIE: &str = "folio_intro";
pub const NOTICE_COOKIE: &str = "folio_notice";
pub const SCROLL_COOKIE_PREFIX: &str = "folio_scroll_";

/// Request cookies with typed accessors for the site's session state.
#[derive(Debug, Clone, Default)]
pub struct Cookies {
    jar: CookieJar,
}

impl Cookies {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            jar: CookieJar::from_headers(headers),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.jar.get(name).map(|cookie| cookie.value())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_marker(self.get(INTRO_COOKIE).is_some())
    }

    /// Pending notice from a previous redirect. Unknown codes are ignored.
    pub fn notice(&self) -> Option<Notice> {
        self.get(NOTICE_COOKIE).and_then(Notice::from_code)
    }

    pub fn scroll_offset(&self, page: &str) -> Option<u32> {
        let key = page_key(page)?;
        self.get(&format!("{SCROLL_COOKIE_PREFIX}{key}"))
            .and_then(parse_offset)
    }
}

impl<S> FromRequestParts<S> for Cookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Cookies::from_headers(&parts.headers))
    }
}

/// Classify how the browser arrived at a page.
///
/// A reload sends `Cache-Control: max-age=0` (or `no-cache`); back links
/// carry `?nav=back`. The browser's own back button looks like a push here;
/// the client handles that case from `data-saved-offset`.
pub fn navigation_kind(headers: &HeaderMap, nav: Option<&str>) -> NavigationKind {
    let reload = headers
        .get_all(CACHE_CONTROL)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .any(|directive| directive == "max-age=0" || directive == "no-cache");

    if reload {
        NavigationKind::Reload
    } else if nav == Some("back") {
        NavigationKind::Pop
    } else {
        NavigationKind::Push
    }
}

/// Browser-session cookie (no expiry) scoped to the whole site.
fn session_cookie(
    name: impl Into<Cow<'static, str>>,
    value: impl Into<Cow<'static, str>>,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie carrying a notice to the next page.
pub fn notice_cookie(notice: Notice) -> Cookie<'static> {
    session_cookie(NOTICE_COOKIE, notice.code())
}

pub fn clear_notice_cookie() -> Cookie<'static> {
    let mut cookie = session_cookie(NOTICE_COOKIE, "");
    cookie.make_removal();
    cookie
}

/// Records that the intro has played.
pub fn intro_cookie() -> Cookie<'static> {
    session_cookie(INTRO_COOKIE, "1")
}

/// Stores a page's scroll offset. `page` must already be a valid key.
pub fn scroll_cookie(page: &str, offset: u32) -> Cookie<'static> {
    session_cookie(format!("{SCROLL_COOKIE_PREFIX}{page}"), offset.to_string())
}

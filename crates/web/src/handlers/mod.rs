//! Page and form handlers.
//!
//! Every page handler follows the same shape: spawn the page's reads under
//! a [`PageLoader`](crate::loader::PageLoader), join them with fallbacks,
//! render the view, then attach any session cookies via [`PageResponse`].

pub mod art;
pub mod contact;
pub mod fallback;
pub mod home;
pub mod projects;
pub mod session;
pub mod social;
pub mod studio;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Datelike;
use folio_core::notice::Notice;
use maud::Markup;
use serde::Deserialize;

use crate::session::{clear_notice_cookie, notice_cookie, Cookies};

/// `?nav=back` marks a back-link navigation.
#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    pub nav: Option<String>,
}

/// Notices to show on the page being rendered.
///
/// Starts with the one carried over by cookie, if any, and collects those
/// raised while loading.
#[derive(Debug, Default)]
pub struct PageNotices {
    list: Vec<Notice>,
    from_cookie: bool,
}

impl PageNotices {
    pub fn from_cookies(cookies: &Cookies) -> Self {
        match cookies.notice() {
            Some(notice) => Self {
                list: vec![notice],
                from_cookie: true,
            },
            None => Self::default(),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if !self.list.contains(&notice) {
            self.list.push(notice);
        }
    }

    pub fn list_mut(&mut self) -> &mut Vec<Notice> {
        &mut self.list
    }

    pub fn as_slice(&self) -> &[Notice] {
        &self.list
    }
}

/// A rendered page plus the cookies to set with it.
pub struct PageResponse {
    status: StatusCode,
    markup: Markup,
    cookies: CookieJar,
}

impl PageResponse {
    /// Wrap `markup`, clearing the notice cookie if it was shown.
    pub fn new(markup: Markup, notices: &PageNotices) -> Self {
        let mut cookies = CookieJar::new();
        if notices.from_cookie {
            cookies = cookies.add(clear_notice_cookie());
        }
        Self {
            status: StatusCode::OK,
            markup,
            cookies,
        }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn cookie(mut self, cookie: Cookie<'static>) -> Self {
        self.cookies = self.cookies.add(cookie);
        self
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        (self.status, self.cookies, Html(self.markup.into_string())).into_response()
    }
}

/// 303 to `to`, carrying `notice` to the next page.
pub fn redirect_with_notice(to: &str, notice: Notice) -> Response {
    (CookieJar::new().add(notice_cookie(notice)), Redirect::to(to)).into_response()
}

/// Year shown in the footer.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

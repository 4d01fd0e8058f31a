use axum::http::StatusCode;
use maud::{html, Markup};

use crate::views::layout::{self, PageMeta};

/// Generic error page. `message` must already be safe to show.
pub fn page(status: StatusCode, message: &str) -> Markup {
    let meta = PageMeta::new(format!("{} | Error", status.as_u16()), "error");
    let body = html! {
        main.page.error-page {
            h1 { (status.as_u16()) }
            p { (message) }
            a.button href="/" { "Return to Home" }
        }
    };
    layout::page(&meta, &[], body)
}

pub fn not_found(path: &str) -> Markup {
    let meta = PageMeta::new("404 | Page not found", "not-found");
    let body = html! {
        main.page.error-page {
            h1 { "404" }
            p { "Oops! Page not found" }
            p.muted { code { (path) } }
            a.button href="/" { "Return to Home" }
        }
    };
    layout::page(&meta, &[], body)
}

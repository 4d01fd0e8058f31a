use folio_core::notice::Notice;
use maud::{html, Markup, DOCTYPE};

/// Document-level settings for one page.
pub struct PageMeta<'a> {
    /// Full `<title>` text.
    pub title: String,
    /// Key used for scroll bookkeeping, see `POST /session/scroll`.
    pub page_key: &'a str,
    /// Play the entrance animation on load.
    pub animate: bool,
    /// Offset to restore after load, in pixels.
    pub scroll_to: u32,
    /// Offset to restore if the browser reports a back/forward navigation.
    pub saved_offset: u32,
}

impl<'a> PageMeta<'a> {
    pub fn new(title: impl Into<String>, page_key: &'a str) -> Self {
        Self {
            title: title.into(),
            page_key,
            animate: false,
            scroll_to: 0,
            saved_offset: 0,
        }
    }
}

/// `"{section} | {owner}"`.
pub fn title(section: &str, owner: &str) -> String {
    format!("{section} | {owner}")
}

pub fn page(meta: &PageMeta<'_>, notices: &[Notice], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                link rel="stylesheet" href="/assets/site.css";
                script src="/assets/site.js" defer {}
            }
            body
                data-page=(meta.page_key)
                data-animate=(if meta.animate { "true" } else { "false" })
                data-scroll-to=(meta.scroll_to)
                data-saved-offset=(meta.saved_offset)
            {
                div #page-loader.loader hidden {
                    div.loader__spinner {}
                }
                (toasts(notices))
                (body)
            }
        }
    }
}

pub fn toasts(notices: &[Notice]) -> Markup {
    html! {
        @if !notices.is_empty() {
            div.toasts role="status" aria-live="polite" {
                @for notice in notices {
                    div class={ "toast toast--" (notice.level().as_str()) } {
                        (notice.message())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_carries_entrance_attributes() {
        let meta = PageMeta {
            title: title("Social Feed", "Souhardyo Dey"),
            page_key: "home",
            animate: true,
            scroll_to: 640,
            saved_offset: 640,
        };
        let html = page(&meta, &[Notice::ContactSent], html! { main {} }).into_string();
        assert!(html.contains("<title>Social Feed | Souhardyo Dey</title>"));
        assert!(html.contains(r#"data-animate="true""#));
        assert!(html.contains(r#"data-scroll-to="640""#));
        assert!(html.contains(r#"data-saved-offset="640""#));
        assert!(html.contains("toast--success"));
        assert!(html.contains("Message sent successfully!"));
    }
}

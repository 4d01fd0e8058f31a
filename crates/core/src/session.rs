//! Entrance animation and scroll continuity for the home page.
//!
//! The home page plays its entrance animation once per browser session and,
//! on back navigation, returns the reader to where they left off. Both
//! decisions are computed from explicit per-request inputs and handed to the
//! view as an [`Entrance`].

/// Whether this browser session has already seen the home page intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    FirstVisit,
    Returning,
}

impl Lifecycle {
    pub fn from_marker(has_seen_intro: bool) -> Self {
        if has_seen_intro {
            Lifecycle::Returning
        } else {
            Lifecycle::FirstVisit
        }
    }
}

/// How the reader arrived at the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Link or typed URL.
    Push,
    /// Back navigation.
    Pop,
    /// Hard reload of the same page.
    Reload,
}

/// What the home page should do on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    /// Play the entrance animation.
    pub animate: bool,
    /// Scroll offset to restore, `0` for the top.
    pub scroll_to: u32,
    /// Record the session marker so the intro is not replayed.
    pub set_marker: bool,
    /// Offset saved for this page in the current session.
    ///
    /// The browser's own back button cannot be told apart from a link on
    /// the server, so the client applies this when it sees a back/forward
    /// navigation.
    pub saved_offset: u32,
}

impl Entrance {
    /// A render that is not a navigation at all, e.g. a form re-render.
    pub const STILL: Entrance = Entrance {
        animate: false,
        scroll_to: 0,
        set_marker: false,
        saved_offset: 0,
    };

    pub fn decide(lifecycle: Lifecycle, navigation: NavigationKind, saved: Option<u32>) -> Self {
        let saved = saved.unwrap_or(0);
        match (navigation, lifecycle) {
            (NavigationKind::Reload, _) | (_, Lifecycle::FirstVisit) => Self {
                animate: true,
                scroll_to: 0,
                set_marker: true,
                saved_offset: 0,
            },
            (NavigationKind::Pop, Lifecycle::Returning) => Self {
                animate: false,
                scroll_to: saved,
                set_marker: false,
                saved_offset: saved,
            },
            (NavigationKind::Push, Lifecycle::Returning) => Self {
                animate: false,
                scroll_to: 0,
                set_marker: false,
                saved_offset: saved,
            },
        }
    }
}

/// Maximum length of a page key used in scroll cookies.
pub const MAX_PAGE_KEY_LEN: usize = 32;

/// Normalise a page key for use in a cookie name.
///
/// Only ASCII alphanumerics, `-` and `_` are accepted; anything else is
/// rejected rather than escaped.
pub fn page_key(raw: &str) -> Option<String> {
    let key = raw.trim().to_ascii_lowercase();
    let valid = !key.is_empty()
        && key.len() <= MAX_PAGE_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(key)
}

/// Parse a stored scroll offset. Garbage reads as "nothing saved".
pub fn parse_offset(raw: &str) -> Option<u32> {
    raw.trim().parse::<f64>().ok().and_then(|v| {
        if v.is_finite() && v >= 0.0 {
            Some(v.min(u32::MAX as f64) as u32)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_animates_and_marks() {
        let entrance = Entrance::decide(Lifecycle::FirstVisit, NavigationKind::Push, Some(400));
        assert!(entrance.animate);
        assert!(entrance.set_marker);
        assert_eq!(entrance.scroll_to, 0);
    }

    #[test]
    fn reload_replays_intro_even_when_returning() {
        let entrance = Entrance::decide(Lifecycle::Returning, NavigationKind::Reload, Some(400));
        assert!(entrance.animate);
        assert_eq!(entrance.scroll_to, 0);
    }

    #[test]
    fn back_navigation_restores_offset_without_animation() {
        let entrance = Entrance::decide(Lifecycle::Returning, NavigationKind::Pop, Some(812));
        assert!(!entrance.animate);
        assert!(!entrance.set_marker);
        assert_eq!(entrance.scroll_to, 812);
    }

    #[test]
    fn back_navigation_without_saved_offset_goes_to_top() {
        let entrance = Entrance::decide(Lifecycle::Returning, NavigationKind::Pop, None);
        assert_eq!(entrance.scroll_to, 0);
    }

    #[test]
    fn link_navigation_resets_to_top() {
        let entrance = Entrance::decide(Lifecycle::Returning, NavigationKind::Push, Some(812));
        assert!(!entrance.animate);
        assert_eq!(entrance.scroll_to, 0);
    }

    #[test]
    fn returning_visits_carry_the_saved_offset() {
        let push = Entrance::decide(Lifecycle::Returning, NavigationKind::Push, Some(800));
        assert_eq!(push.saved_offset, 800);
        let pop = Entrance::decide(Lifecycle::Returning, NavigationKind::Pop, Some(800));
        assert_eq!(pop.saved_offset, 800);
        let reload = Entrance::decide(Lifecycle::Returning, NavigationKind::Reload, Some(800));
        assert_eq!(reload.saved_offset, 0);
        let first = Entrance::decide(Lifecycle::FirstVisit, NavigationKind::Push, Some(800));
        assert_eq!(first.saved_offset, 0);
    }

    #[test]
    fn page_keys_are_restricted() {
        assert_eq!(page_key(" Index "), Some("index".to_string()));
        assert_eq!(page_key("studio_dsy"), Some("studio_dsy".to_string()));
        assert_eq!(page_key(""), None);
        assert_eq!(page_key("a;b"), None);
        assert_eq!(page_key(&"x".repeat(40)), None);
    }

    #[test]
    fn offsets_parse_leniently() {
        assert_eq!(parse_offset("120"), Some(120));
        assert_eq!(parse_offset("120.7"), Some(120));
        assert_eq!(parse_offset("-4"), None);
        assert_eq!(parse_offset("NaN"), None);
        assert_eq!(parse_offset("abc"), None);
    }
}

//! Transient user-facing notifications (toasts).
//!
//! A notice survives one redirect as a short code in a cookie, so only the
//! fixed set below can be carried across requests.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ProjectLoadFailed,
    StudioLoadFailed,
    ProjectsLoadFailed,
    ContentLoadFailed,
    GalleryLoadFailed,
    FeedLoadFailed,
    ContactSent,
    ContactFailed,
    ContactInvalid,
}

impl Notice {
    const ALL: [Notice; 9] = [
        Notice::ProjectLoadFailed,
        Notice::StudioLoadFailed,
        Notice::ProjectsLoadFailed,
        Notice::ContentLoadFailed,
        Notice::GalleryLoadFailed,
        Notice::FeedLoadFailed,
        Notice::ContactSent,
        Notice::ContactFailed,
        Notice::ContactInvalid,
    ];

    /// Stable code stored in the notice cookie.
    pub fn code(&self) -> &'static str {
        match self {
            Notice::ProjectLoadFailed => "project_load_failed",
            Notice::StudioLoadFailed => "studio_load_failed",
            Notice::ProjectsLoadFailed => "projects_load_failed",
            Notice::ContentLoadFailed => "content_load_failed",
            Notice::GalleryLoadFailed => "gallery_load_failed",
            Notice::FeedLoadFailed => "feed_load_failed",
            Notice::ContactSent => "contact_sent",
            Notice::ContactFailed => "contact_failed",
            Notice::ContactInvalid => "contact_invalid",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.code() == code)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::ProjectLoadFailed => "Could not load project details",
            Notice::StudioLoadFailed => "Could not load studio details",
            Notice::ProjectsLoadFailed => "Failed to load projects",
            Notice::ContentLoadFailed => "Failed to load studio releases",
            Notice::GalleryLoadFailed => "Failed to load the gallery",
            Notice::FeedLoadFailed => "Some feeds could not be loaded",
            Notice::ContactSent => "Message sent successfully!",
            Notice::ContactFailed => "Failed to send message. Please try again.",
            Notice::ContactInvalid => "Please fill in your name, a valid email and a message.",
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Notice::ContactSent => Level::Success,
            _ => Level::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for notice in Notice::ALL {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
    }

    #[test]
    fn unknown_code_is_dropped() {
        assert_eq!(Notice::from_code("<script>"), None);
    }

    #[test]
    fn project_failure_message() {
        assert_eq!(
            Notice::ProjectLoadFailed.message(),
            "Could not load project details"
        );
        assert_eq!(Notice::ProjectLoadFailed.level(), Level::Error);
        assert_eq!(Notice::ContactSent.level(), Level::Success);
    }
}

//! Category filter for the art gallery page.

/// Anything that carries a gallery category label.
pub trait Categorized {
    fn category(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    DigitalArt,
    Photography,
}

impl GalleryFilter {
    pub const ALL: [GalleryFilter; 3] = [
        GalleryFilter::All,
        GalleryFilter::DigitalArt,
        GalleryFilter::Photography,
    ];

    /// Parse the `?filter=` query value. Unknown or missing values mean `All`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("digital-art") | Some("digital art") => GalleryFilter::DigitalArt,
            Some("photography") => GalleryFilter::Photography,
            _ => GalleryFilter::All,
        }
    }

    /// Value used in the `?filter=` query string.
    pub fn slug(&self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::DigitalArt => "digital-art",
            GalleryFilter::Photography => "photography",
        }
    }

    /// Display label, also the category value stored on gallery rows.
    pub fn label(&self) -> &'static str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::DigitalArt => "Digital Art",
            GalleryFilter::Photography => "Photography",
        }
    }

    pub fn matches(&self, item: &impl Categorized) -> bool {
        match self {
            GalleryFilter::All => true,
            other => item.category() == other.label(),
        }
    }

    /// Keep only the items this filter selects, preserving order.
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// 3D models count as digital art.
    pub fn shows_models(&self) -> bool {
        matches!(self, GalleryFilter::All | GalleryFilter::DigitalArt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, &'static str);

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.1
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item("dunes", "Photography"),
            Item("mech", "Digital Art"),
            Item("harbour", "Photography"),
            Item("sketch", "Concept"),
        ]
    }

    #[test]
    fn photography_selects_exact_subset() {
        let items = items();
        let names: Vec<_> = GalleryFilter::Photography
            .apply(&items)
            .iter()
            .map(|i| i.0)
            .collect();
        assert_eq!(names, ["dunes", "harbour"]);
    }

    #[test]
    fn all_keeps_everything() {
        let items = items();
        assert_eq!(GalleryFilter::All.apply(&items).len(), items.len());
    }

    #[test]
    fn query_parsing_defaults_to_all() {
        assert_eq!(GalleryFilter::from_query(None), GalleryFilter::All);
        assert_eq!(GalleryFilter::from_query(Some("bogus")), GalleryFilter::All);
        assert_eq!(
            GalleryFilter::from_query(Some("Photography")),
            GalleryFilter::Photography
        );
        assert_eq!(
            GalleryFilter::from_query(Some("digital-art")),
            GalleryFilter::DigitalArt
        );
    }

    #[test]
    fn slug_round_trips() {
        for filter in GalleryFilter::ALL {
            assert_eq!(GalleryFilter::from_query(Some(filter.slug())), filter);
        }
    }

    #[test]
    fn models_hidden_for_photography() {
        assert!(GalleryFilter::All.shows_models());
        assert!(GalleryFilter::DigitalArt.shows_models());
        assert!(!GalleryFilter::Photography.shows_models());
    }
}

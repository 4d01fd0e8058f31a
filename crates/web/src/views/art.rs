use folio_core::gallery::GalleryFilter;
use folio_core::notice::Notice;
use folio_feeds::SketchfabModel;
use folio_remote::models::gallery::GalleryItem;
use maud::{html, Markup};

use crate::views::components::{back_link, empty_state, footer};
use crate::views::layout::{self, PageMeta};

pub struct ArtView<'a> {
    pub owner: &'a str,
    pub year: i32,
    pub filter: GalleryFilter,
    pub models: &'a [SketchfabModel],
    pub gallery: &'a [GalleryItem],
}

pub fn page(view: &ArtView<'_>, notices: &[Notice]) -> Markup {
    let meta = PageMeta::new(layout::title("Art & Photography", view.owner), "art");
    let filtered = view.filter.apply(view.gallery);
    let show_models = view.filter.shows_models() && !view.models.is_empty();
    let is_empty = view.models.is_empty() && view.gallery.is_empty();

    let body = html! {
        nav.page-nav { (back_link("/", "Home")) }
        main.page {
            header.page__header {
                h1 { "Gallery" }
                p.muted { "A curated collection of my creative works and photography." }
            }
            nav.filter-bar aria-label="Filter gallery" {
                @for filter in GalleryFilter::ALL {
                    a class=(if filter == view.filter { "filter is-active" } else { "filter" })
                        href={ "/art?filter=" (filter.slug()) }
                    { (filter.label()) }
                }
            }
            @if is_empty {
                (empty_state(
                    "The Canvas is Blank",
                    "New pieces are on their way. Check back soon!",
                ))
            } @else if filtered.is_empty() && !show_models {
                (empty_state(
                    &format!("Nothing in {} yet", view.filter.label()),
                    "Try another category, or check back soon.",
                ))
            } @else {
                @if !filtered.is_empty() {
                    section.gallery data-filter=(view.filter.slug()) {
                        @if view.filter != GalleryFilter::All {
                            h2.section-title { (view.filter.label()) }
                        }
                        div.masonry {
                            @for item in &filtered {
                                figure.gallery-item {
                                    img src=(item.image_url) alt=(item.title) loading="lazy";
                                    figcaption {
                                        span.gallery-item__title { (item.title) }
                                        span.badge { (item.category) }
                                        @if !item.description.is_empty() {
                                            p.muted { (item.description) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                @if show_models {
                    section.models {
                        h2.section-title { "3D Models" }
                        div class="grid grid--three" {
                            @for model in view.models {
                                a.model-card href=(model.viewer_url) target="_blank" rel="noreferrer" {
                                    @if let Some(thumb) = &model.thumbnail {
                                        img src=(thumb) alt=(model.name) loading="lazy";
                                    } @else {
                                        div.placeholder {}
                                    }
                                    h3 { (model.name) }
                                }
                            }
                        }
                    }
                }
            }
        }
        (footer(view.owner, view.year))
    };
    layout::page(&meta, notices, body)
}

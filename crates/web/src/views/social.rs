use folio_core::notice::Notice;
use folio_feeds::{PhotoPost, Video};
use maud::{html, Markup};

use crate::views::components::{back_link, footer};
use crate::views::layout::{self, PageMeta};

pub struct SocialView<'a> {
    pub owner: &'a str,
    pub year: i32,
    pub photos: &'a [PhotoPost],
    pub videos: &'a [Video],
}

pub fn page(view: &SocialView<'_>, notices: &[Notice]) -> Markup {
    let meta = PageMeta::new(layout::title("Social Feed", view.owner), "social");
    let body = html! {
        nav.page-nav { (back_link("/", "Home")) }
        main.page {
            header.page__header {
                h1 { "Social Feed" }
                p.muted { "Updates from my digital life" }
            }
            section.feed #instagram {
                h2.section-title { "Instagram" }
                @if view.photos.is_empty() {
                    div.notice-box { p { "No recent posts found." } }
                } @else {
                    div class="grid grid--four" {
                        @for post in view.photos {
                            a.photo-tile href=(post.permalink) target="_blank" rel="noreferrer" {
                                @if post.is_video() {
                                    video src=(post.media_url) muted loop playsinline data-hover-play {}
                                } @else {
                                    img src=(post.media_url) alt=(post.alt_text()) loading="lazy";
                                }
                            }
                        }
                    }
                }
            }
            section.feed #youtube {
                h2.section-title { "YouTube" }
                @if view.videos.is_empty() {
                    div.notice-box { p { "No Videos loaded." } }
                } @else {
                    div class="grid grid--three" {
                        @for video in view.videos {
                            a.video-card href=(video.watch_url()) target="_blank" rel="noreferrer" {
                                img src=(video.thumbnail) alt=(video.title) loading="lazy";
                                h3 class="clamp-2" { (video.title) }
                                time.muted datetime=(video.published_at.to_rfc3339()) { (video.published_label()) }
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

//! Consolidated studio page and its content overlay.
//!
//! The overlay is addressable: `/studio/{slug}/content/{id}?img={n}`
//! renders this page with the overlay open. Every control is a plain link
//! so carousel and item switching work without script.

use folio_core::audio::{format_time, AudioTransport};
use folio_core::carousel::Carousel;
use folio_core::notice::Notice;
use folio_remote::models::studio::Studio;
use folio_remote::models::studio_content::{ContentKind, StudioContent};
use maud::{html, Markup};

use crate::views::components::{back_link, footer};
use crate::views::layout::{self, PageMeta};

pub struct StudioView<'a> {
    pub owner: &'a str,
    pub year: i32,
    pub studio: &'a Studio,
    pub content: &'a [StudioContent],
    pub modal: Option<ModalView<'a>>,
}

/// The open overlay: one item, its image carousel and its neighbours.
pub struct ModalView<'a> {
    pub item: &'a StudioContent,
    pub carousel: Carousel,
    pub prev_id: Option<&'a str>,
    pub next_id: Option<&'a str>,
}

pub fn page(view: &StudioView<'_>, notices: &[Notice]) -> Markup {
    let studio = view.studio;
    let meta = PageMeta::new(layout::title(&studio.name, view.owner), "studio");

    let body = html! {
        header.studio-hero style=[hero_style(&studio.hero_image_url)] {
            nav.studio-hero__nav { (back_link("/", "Back")) }
            div.studio-hero__identity {
                div.studio-hero__logo { img src=(studio.logo_url) alt=(studio.name); }
                div {
                    h1 { (studio.name) }
                    p.eyebrow { (studio.role) }
                }
            }
        }
        main.page.studio {
            div.studio__main {
                section {
                    h2 { "About The Studio" }
                    p.studio__description { (studio.description_long) }
                }
                section {
                    h2 { (studio.section_title()) }
                    @if view.content.is_empty() {
                        p.muted { "No content released yet." }
                    } @else {
                        div class="grid grid--two" {
                            @for item in view.content {
                                (content_card(&studio.slug, item))
                            }
                        }
                    }
                }
                @if !studio.gallery_images.is_empty() {
                    section {
                        h2 { "Gallery" }
                        div.studio__gallery {
                            @for image in &studio.gallery_images {
                                img src=(image) alt=(studio.name) loading="lazy";
                            }
                        }
                    }
                }
                @if let Some(video) = studio.video_url.as_deref().filter(|v| !v.is_empty()) {
                    section {
                        h2 { "Featured Showcase" }
                        div.video-frame {
                            iframe src=(video) title="Video player" allowfullscreen
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" {}
                        }
                    }
                }
            }
            (sidebar(studio))
        }
        (footer(&studio.name, view.year))
        @if let Some(modal) = &view.modal {
            (overlay(&studio.slug, modal))
        }
    };
    layout::page(&meta, notices, body)
}

/// Inline background for the hero. The URL was checked by the schema
/// (`css_safe_url`) and cannot leave the quoted `url()`.
fn hero_style(url: &str) -> Option<String> {
    (!url.is_empty()).then(|| format!("background-image:url('{url}')"))
}

/// Slug and id are path-safe keys (validated at the schema boundary).
fn content_href(slug: &str, id: &str) -> String {
    format!("/studio/{slug}/content/{id}")
}

fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Game => "Game",
        ContentKind::Music => "Music",
    }
}

fn content_card(slug: &str, item: &StudioContent) -> Markup {
    html! {
        a.content-card href=(content_href(slug, &item.id)) {
            div.content-card__media {
                @if let Some(cover) = item.cover() {
                    img src=(cover) alt=(item.title) loading="lazy";
                } @else {
                    div.placeholder {}
                }
                span.badge { (kind_label(item.kind)) }
            }
            div.content-card__body {
                h3 { (item.title) }
                p class="clamp-2 muted" { (item.description) }
            }
        }
    }
}

fn sidebar(studio: &Studio) -> Markup {
    html! {
        aside.studio__sidebar {
            @if !studio.team_members.is_empty() {
                h3.sidebar__title { "Team" }
                ul.team {
                    @for member in &studio.team_members {
                        li.team__member {
                            span.team__name { (member.name) }
                            span.team__links {
                                @if let Some(url) = &member.insta_url {
                                    a href=(url) target="_blank" rel="noreferrer" aria-label="Instagram" { "IG" }
                                }
                                @if let Some(url) = &member.yt_url {
                                    a href=(url) target="_blank" rel="noreferrer" aria-label="YouTube" { "YT" }
                                }
                            }
                            span.muted { (member.role) }
                        }
                    }
                }
            }
            @if !studio.upcoming_projects.is_empty() {
                h3.sidebar__title { "Upcoming" }
                ul.upcoming {
                    @for project in &studio.upcoming_projects {
                        li {
                            strong { (project.title) }
                            small.muted { (project.desc) }
                        }
                    }
                }
            }
            @if !studio.tech_stack.is_empty() {
                h3.sidebar__title { "Tech Stack" }
                ul.tags {
                    @for tech in &studio.tech_stack {
                        li.tag { (tech) }
                    }
                }
            }
            @if !studio.website_url.is_empty() {
                a.button.sidebar__website href=(studio.website_url) target="_blank" rel="noreferrer" {
                    "Visit Website ↗"
                }
            }
        }
    }
}

fn overlay(slug: &str, modal: &ModalView<'_>) -> Markup {
    let item = modal.item;
    let carousel = modal.carousel;
    let base = content_href(slug, &item.id);
    let close = format!("/studio/{slug}");

    html! {
        div.modal role="dialog" aria-modal="true" aria-label=(item.title) data-close-href=(close) {
            a.modal__backdrop href=(close) aria-label="Close" {}
            @if let Some(prev) = modal.prev_id {
                a class="modal__step modal__step--prev" href=(content_href(slug, prev)) aria-label="Previous item" { "‹" }
            }
            @if let Some(next) = modal.next_id {
                a class="modal__step modal__step--next" href=(content_href(slug, next)) aria-label="Next item" { "›" }
            }
            div.modal__card {
                a.modal__close href=(close) aria-label="Close" { "×" }
                div.carousel {
                    @if let Some(image) = item.images.get(carousel.index()) {
                        img src=(image) alt=(item.title);
                    } @else {
                        div.placeholder { "No images" }
                    }
                    @if carousel.has_controls() {
                        a class="carousel__arrow carousel__arrow--prev"
                            href={ (base) "?img=" (carousel.prev_index()) } aria-label="Previous image" { "‹" }
                        a class="carousel__arrow carousel__arrow--next"
                            href={ (base) "?img=" (carousel.next_index()) } aria-label="Next image" { "›" }
                        div.carousel__dots {
                            @for i in 0..carousel.len() {
                                a class=(if i == carousel.index() { "carousel__dot is-active" } else { "carousel__dot" })
                                    href={ (base) "?img=" (i) } aria-label={ "Image " (i + 1) } {}
                            }
                        }
                    }
                }
                div.modal__details {
                    h2 { (item.title) }
                    span.badge { (kind_label(item.kind)) }
                    @if let Some(src) = item.audio() {
                        (audio_player(src))
                    }
                    p.modal__description { (item.description) }
                    @if let Some(link) = item.see_more() {
                        a.button href=(link) target="_blank" rel="noreferrer" { "See More ↗" }
                    }
                }
            }
        }
    }
}

/// Custom audio transport. A fresh [`AudioTransport`] is rendered for every
/// item, so switching items always starts stopped at `0:00`.
fn audio_player(src: &str) -> Markup {
    let transport = AudioTransport::new();
    html! {
        div.audio data-audio {
            audio src=(src) preload="metadata" {}
            button.audio__toggle type="button" data-action="toggle" aria-label="Play" {
                (if transport.is_playing() { "❚❚" } else { "▶" })
            }
            div.audio__timeline {
                input.audio__seek type="range" min="0" max=(transport.duration()) step="0.1"
                    value=(transport.position()) aria-label="Seek";
                div.audio__progress style={ "width:" (transport.progress_percent()) "%" } {}
            }
            span.audio__time {
                span data-time="position" { (format_time(transport.position())) }
                " / "
                span data-time="duration" { (format_time(transport.duration())) }
            }
            button.audio__mute type="button" data-action="mute" aria-label="Mute" {
                (if transport.is_muted() { "🔇" } else { "🔊" })
            }
            input.audio__volume type="range" min="0" max="1" step="0.01"
                value=(transport.effective_volume()) aria-label="Volume";
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn studio() -> Studio {
        serde_json::from_value(json!({
            "slug": "xero", "name": "Xero Theory", "role": "Music & Sound Studio",
            "tech_stack": ["FL Studio"]
        }))
        .unwrap()
    }

    fn item(images: &[&str]) -> StudioContent {
        serde_json::from_value(json!({
            "id": "t1", "studio_slug": "xero", "type": "Music", "title": "Nocturne",
            "images": images, "audio_url": "https://cdn.example/n.mp3"
        }))
        .unwrap()
    }

    #[test]
    fn single_image_has_no_carousel_controls() {
        let studio = studio();
        let content = vec![item(&["a.png"])];
        let view = StudioView {
            owner: "Owner",
            year: 2025,
            studio: &studio,
            content: &content,
            modal: Some(ModalView {
                item: &content[0],
                carousel: Carousel::new(0, 1),
                prev_id: Some("t1"),
                next_id: Some("t1"),
            }),
        };
        let html = page(&view, &[]).into_string();
        assert!(html.contains("Discography"));
        assert!(!html.contains("carousel__arrow"));
        assert!(html.contains("data-audio"));
        assert!(html.contains("0:00"));
    }

    #[test]
    fn empty_images_render_placeholder() {
        let studio = studio();
        let content = vec![item(&[])];
        let view = StudioView {
            owner: "Owner",
            year: 2025,
            studio: &studio,
            content: &content,
            modal: Some(ModalView {
                item: &content[0],
                carousel: Carousel::new(0, 0),
                prev_id: None,
                next_id: None,
            }),
        };
        let html = page(&view, &[]).into_string();
        assert!(html.contains("No images"));
        assert!(!html.contains("carousel__dot"));
    }
}

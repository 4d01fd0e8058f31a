use folio_remote::models::project::ProjectCard;
use maud::{html, Markup};

/// Link back to `href`, flagged as back navigation so the target can
/// restore its scroll position.
pub fn back_link(href: &str, label: &str) -> Markup {
    let sep = if href.contains('?') { '&' } else { '?' };
    html! {
        a.back-link href={ (href) (sep) "nav=back" } {
            span.back-link__arrow aria-hidden="true" { "←" }
            " " (label)
        }
    }
}

pub fn section_heading(subtitle: &str, title: &str, accent: &str) -> Markup {
    html! {
        div.section-heading {
            span.section-heading__subtitle { (subtitle) }
            h2 { (title) " " span.accent { (accent) } }
        }
    }
}

pub fn empty_state(title: &str, body: &str) -> Markup {
    html! {
        div.empty-state {
            h3 { (title) }
            p { (body) }
        }
    }
}

pub fn project_card(card: &ProjectCard) -> Markup {
    html! {
        a.project-card href={ "/project/" (card.id) } {
            div.project-card__media {
                img src=(card.image) alt=(card.title) loading="lazy";
            }
            div.project-card__body {
                span.eyebrow { (card.category) }
                h3 { (card.title) }
                p class="clamp-2" { (card.description) }
            }
        }
    }
}

pub fn footer(owner: &str, year: i32) -> Markup {
    html! {
        footer.site-footer {
            p { "© " (year) " " (owner) ". All Rights Reserved" }
        }
    }
}

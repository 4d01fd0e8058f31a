use folio_core::contact::{ContactForm, SubmitState};
use folio_core::notice::Notice;
use folio_core::orbit::Orbit;
use folio_core::session::Entrance;
use folio_remote::models::project::ProjectCard;
use maud::{html, Markup};

use crate::content::{
    ABOUT, HERO_INTRO, HERO_TAGLINE, ORBITS, SKILLS, SOCIAL_LINKS, STUDIO_CARDS,
};
use crate::views::components::{empty_state, footer, project_card, section_heading};
use crate::views::layout::{self, PageMeta};

pub struct HomeView<'a> {
    pub owner: &'a str,
    pub year: i32,
    pub entrance: Entrance,
    pub projects: &'a [ProjectCard],
    pub form: &'a ContactForm,
    pub form_action: &'a str,
}

pub fn page(view: &HomeView<'_>, notices: &[Notice]) -> Markup {
    let meta = PageMeta {
        title: layout::title("Portfolio", view.owner),
        page_key: "home",
        animate: view.entrance.animate,
        scroll_to: view.entrance.scroll_to,
        saved_offset: view.entrance.saved_offset,
    };

    let body = html! {
        (header())
        main #scroll-container {
            (hero(view.owner))
            (about())
            (works(view.projects))
            (contact(view.form, view.form_action))
            (footer(view.owner, view.year))
        }
    };
    layout::page(&meta, notices, body)
}

fn header() -> Markup {
    html! {
        header.site-header data-smart-header {
            a.site-header__logo href="#hero" aria-label="Top" {
                img src="/assets/img/logo.svg" alt="Logo";
            }
            nav.site-header__nav {
                a href="#work" { "Work" }
                a href="#about" { "About" }
                a href="#contact" { "Contact" }
                a href="/projects" { "Projects" }
                a href="/art" { "Art" }
                a href="/social" { "Social" }
            }
            a class="button button--outline" href="#contact" { "Contact" }
        }
    }
}

fn hero(owner: &str) -> Markup {
    html! {
        section #hero.hero {
            div.hero__text.reveal {
                p.eyebrow { (owner) " | " (HERO_TAGLINE) }
                h1 {
                    "Crafting Immersive " br;
                    span.glow { "3D Worlds" } " & " span.glow { "VFX." }
                }
                p.lead { (HERO_INTRO) }
                div.hero__actions {
                    a.button href="#work" { "Explore Projects →" }
                    a class="button button--ghost" href="#about" { "More About Me" }
                }
            }
            (orbits())
        }
    }
}

/// The draggable orbit rings. Positions are rendered server-side;
/// `site.js` seeds its motion from `data-phase` and `data-velocity`.
fn orbits() -> Markup {
    html! {
        div.orbits.reveal aria-hidden="true" {
            div.orbits__core { "◆" }
            @for icon in &ORBITS {
                @let orbit = Orbit::new(icon.spec);
                @let spec = orbit.spec();
                @let (x, y) = orbit.position();
                div.orbit__ring style={ "width:" (spec.radius * 2.0) "px;height:" (spec.radius * 2.0) "px" } {}
                div.orbit__icon
                    data-orbit
                    data-radius=(spec.radius)
                    data-velocity=(format!("{:.4}", orbit.angular_velocity()))
                    data-phase=(format!("{:.4}", orbit.animation_phase_secs()))
                    title=(icon.label)
                    style={ "transform:translate(" (format!("{x:.2}")) "px," (format!("{y:.2}")) "px)" }
                {
                    span { (icon.glyph) }
                }
            }
        }
    }
}

fn about() -> Markup {
    html! {
        section #about.section {
            (section_heading("My Journey", "About", "Me"))
            div.about__text {
                @for paragraph in &ABOUT {
                    p { (paragraph) }
                }
            }
            ul.tags.about__skills {
                @for skill in &SKILLS {
                    li.tag { (skill) }
                }
            }
            div.studio-cards {
                @for card in &STUDIO_CARDS {
                    a.studio-card href={ "/studio/" (card.slug) } data-save-scroll {
                        img src=(card.logo) alt=(card.name);
                        h3 { (card.name) }
                        p.eyebrow { (card.role) }
                        span.studio-card__more { "View Full Details →" }
                    }
                }
            }
        }
    }
}

fn works(projects: &[ProjectCard]) -> Markup {
    html! {
        section #work.section {
            (section_heading("Portfolio", "My", "Works"))
            @if projects.is_empty() {
                (empty_state(
                    "No Featured Works Yet",
                    "I'm currently brewing something magical in the lab. Check back soon for updates!",
                ))
            } @else {
                div class="grid grid--two" data-save-scroll {
                    @for card in projects {
                        (project_card(card))
                    }
                }
                p.section__more { a href="/projects" data-save-scroll { "View all projects →" } }
            }
        }
    }
}

fn contact(form: &ContactForm, action: &str) -> Markup {
    html! {
        section #contact.section {
            (section_heading("Contact", "Get In", "Touch"))
            div.contact {
                div.contact__links {
                    h3 { "Connect With Me" }
                    p.muted { "Follow my journey, check out my 3D assets, or support my work on these platforms." }
                    div.social-links {
                        @for link in &SOCIAL_LINKS {
                            a class={ "social-link social-link--" (link.tone) }
                                href=(link.url) target="_blank" rel="noopener noreferrer"
                            {
                                span.social-link__platform { (link.platform) }
                                span.social-link__title { (link.title) }
                            }
                        }
                    }
                }
                form.contact__form method="post" action=(action) data-pending-form {
                    h3 { "Send a Message" }
                    label {
                        span { "Name" }
                        input type="text" name="user_name" placeholder="Your Name" value=(form.name) required;
                    }
                    label {
                        span { "Email" }
                        input type="email" name="user_email" placeholder="Your Email" value=(form.email) required;
                    }
                    label {
                        span { "Message" }
                        textarea name="message" rows="5" placeholder="How can I help you?" required { (form.message) }
                    }
                    button.button type="submit" data-pending-label=(SubmitState::Pending.label()) {
                        (SubmitState::Idle.label())
                    }
                }
            }
        }
    }
}

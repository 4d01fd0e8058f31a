use folio_core::notice::Notice;
use folio_remote::models::project::ProjectCard;
use maud::{html, Markup};

use crate::views::components::{back_link, empty_state, footer, project_card};
use crate::views::layout::{self, PageMeta};

pub fn page(owner: &str, year: i32, projects: &[ProjectCard], notices: &[Notice]) -> Markup {
    let meta = PageMeta::new(layout::title("Game Projects", owner), "projects");
    let body = html! {
        nav.page-nav { (back_link("/", "Home")) }
        main.page {
            header.page__header {
                h1 { "Game " span.accent { "Projects" } }
                p.muted { "A collection of games and interactive experiences I've built." }
            }
            @if projects.is_empty() {
                (empty_state(
                    "No Featured Projects Yet",
                    "New projects are on the way. Check back soon!",
                ))
            } @else {
                div class="grid grid--two" {
                    @for card in projects {
                        (project_card(card))
                    }
                }
            }
        }
        (footer(owner, year))
    };
    layout::page(&meta, notices, body)
}

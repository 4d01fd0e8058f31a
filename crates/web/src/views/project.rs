use folio_core::notice::Notice;
use folio_remote::models::project::Project;
use maud::{html, Markup};

use crate::views::components::{back_link, footer};
use crate::views::layout::{self, PageMeta};

pub fn page(owner: &str, year: i32, project: &Project, notices: &[Notice]) -> Markup {
    let meta = PageMeta::new(layout::title(&project.title, owner), "project");
    let body = html! {
        nav.page-nav { (back_link("/", "Back")) }
        main.page.project {
            header.project__header {
                span.eyebrow { (project.category) }
                h1 { (project.title) }
            }
            div.project__hero {
                img src=(project.image) alt=(project.title);
            }
            div.project__layout {
                article.project__body {
                    h2 { "Overview" }
                    p.lead { (project.description) }
                    @for paragraph in project.paragraphs() {
                        p { (paragraph) }
                    }
                }
                aside.project__meta {
                    @if !project.technologies.is_empty() {
                        h3 { "Technologies" }
                        ul.tags {
                            @for tech in &project.technologies {
                                li.tag { (tech) }
                            }
                        }
                    }
                    h3 { "Release Date" }
                    p { time datetime=(project.created_at.to_rfc3339()) { (project.release_date()) } }
                    div.project__links {
                        @if let Some(live) = project.live_link.as_deref().filter(|l| !l.is_empty()) {
                            a.button href=(live) target="_blank" rel="noreferrer" { "Live Demo" }
                        }
                        @if let Some(code) = project.github_link.as_deref().filter(|l| !l.is_empty()) {
                            a class="button button--outline" href=(code) target="_blank" rel="noreferrer" { "View Code" }
                        }
                    }
                }
            }
        }
        (footer(owner, year))
    };
    layout::page(&meta, notices, body)
}

//! Selected projects grid

use super::card::glass_card;
use super::section::{heading, section};
use crate::content::PROJECTS;
use crate::snapshot::RenderSnapshot;
use crate::view::{div, h3, p, span, Element};
use folio_theme::StyleRole;

pub const PROJECTS_ID: &str = "projects";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    let cards = PROJECTS.iter().enumerate().map(|(i, project)| {
        glass_card(snapshot)
            .id(format!("project-{i}"))
            .class("h-80 flex flex-col justify-between group cursor-pointer")
            .child(
                div()
                    .child(
                        div()
                            .class("flex justify-between items-start mb-4")
                            .child(span().style(snapshot.style(StyleRole::Badge)).text(project.year))
                            .child(
                                span()
                                    .class("opacity-0 group-hover:opacity-100 transition-opacity")
                                    .attr("data-icon", "arrow-up-right")
                                    .attr("aria-hidden", "true"),
                            ),
                    )
                    .child(h3().class("text-2xl font-bold mb-2").text(project.title))
                    .child(
                        p().style(snapshot.style(StyleRole::Muted))
                            .class("text-sm")
                            .text(project.description),
                    ),
            )
            .child(div().style(snapshot.style(StyleRole::Thumbnail)))
    });

    section(PROJECTS_ID, snapshot)
        .child(heading("Selected Projects", snapshot))
        .child(div().class("grid grid-cols-1 md:grid-cols-2 gap-8").children(cards))
}

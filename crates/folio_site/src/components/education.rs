//! Education timeline beside the tech-stack chips

use super::section::{heading, section};
use crate::content::{EDUCATION, SKILLS};
use crate::snapshot::RenderSnapshot;
use crate::view::{div, h3, p, span, Element};
use folio_theme::StyleRole;

pub const EDUCATION_ID: &str = "education";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    let entries = EDUCATION.iter().enumerate().map(|(i, entry)| {
        div()
            .id(format!("education-{i}"))
            .class("relative")
            .child(div().style(snapshot.style(StyleRole::TimelineDot)))
            .child(h3().class("text-xl font-bold").text(entry.degree))
            .child(p().style(snapshot.style(StyleRole::Muted)).text(entry.school))
            .child(p().style(snapshot.style(StyleRole::Caption)).text(entry.date))
    });

    let chips = SKILLS.iter().map(|skill| {
        span()
            .style(snapshot.style(StyleRole::Chip))
            .attr("data-chip", skill.name)
            .text(skill.name)
    });

    section(EDUCATION_ID, snapshot).child(
        div()
            .class("grid grid-cols-1 lg:grid-cols-2 gap-12")
            .child(
                div()
                    .child(heading("Education", snapshot))
                    .child(div().style(snapshot.style(StyleRole::TimelineRail)).children(entries)),
            )
            .child(
                div()
                    .child(heading("Tech Stack", snapshot))
                    .child(div().id("tech-stack").class("flex flex-wrap gap-2").children(chips)),
            ),
    )
}

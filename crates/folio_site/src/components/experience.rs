//! Experience list, one glass card per job

use super::card::glass_card;
use super::section::{heading, section};
use crate::content::JOBS;
use crate::snapshot::RenderSnapshot;
use crate::view::{div, h3, p, span, Element};
use folio_theme::StyleRole;

pub const EXPERIENCE_ID: &str = "experience";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    let cards = JOBS.iter().enumerate().map(|(i, job)| {
        glass_card(snapshot)
            .id(format!("job-{i}"))
            .class("flex flex-col md:flex-row justify-between items-center gap-4")
            .child(
                div()
                    .class("text-left w-full")
                    .child(h3().class("text-xl font-bold").text(job.role))
                    .child(p().style(snapshot.style(StyleRole::Muted)).text(job.company))
                    .child(span().style(snapshot.style(StyleRole::Badge)).text(job.kind.label())),
            )
            .child(span().style(snapshot.style(StyleRole::DateChip)).text(job.date))
    });

    section(EXPERIENCE_ID, snapshot)
        .child(heading("Experience", snapshot))
        .child(div().class("space-y-6").children(cards))
}

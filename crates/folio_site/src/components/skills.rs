//! Skills marquee
//!
//! The skill list is laid out `copies` times in one strip. The strip's
//! transform reflects the snapshot's marquee offset; in a browser the
//! `marquee-track` animation keeps it moving.
//!
//! Spacing between items is each item's own trailing padding, never a gap on
//! the track, so one copy is exactly `100 / copies` percent of the strip.

use super::section::{heading, section};
use crate::content::SKILLS;
use crate::snapshot::RenderSnapshot;
use crate::view::{div, img, span, Element};
use folio_theme::StyleRole;

pub const SKILLS_ID: &str = "skills";
pub const MARQUEE_TRACK_ID: &str = "marquee-track";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    let copies = snapshot.marquee_copies;
    let items = (0..copies).flat_map(move |copy| {
        SKILLS.iter().map(move |skill| {
            let item = div()
                .style(snapshot.style(StyleRole::MarqueeItem))
                .attr("data-skill", skill.name)
                .attr("data-copy", copy.to_string())
                .child(
                    img()
                        .style(snapshot.style(StyleRole::SkillIcon))
                        .attr("src", skill.icon)
                        .attr("alt", skill.name),
                )
                .child(span().text(skill.name));
            // Only the first copy is announced; the rest are visual filler
            if copy > 0 {
                item.attr("aria-hidden", "true")
            } else {
                item
            }
        })
    });

    section(SKILLS_ID, snapshot)
        .child(heading("Skills", snapshot))
        .child(
            div().style(snapshot.style(StyleRole::MarqueeViewport)).child(
                div()
                    .id(MARQUEE_TRACK_ID)
                    .style(snapshot.style(StyleRole::MarqueeTrack))
                    .attr("data-copies", copies.to_string())
                    .attr(
                        "style",
                        format!(
                            "transform: translateX({:.4}%)",
                            snapshot.marquee_offset_percent
                        ),
                    )
                    .children(items),
            ),
        )
}

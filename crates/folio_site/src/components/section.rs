//! Section wrapper and heading

use crate::snapshot::RenderSnapshot;
use crate::view::{h2, section as section_el, Element};
use folio_theme::StyleRole;

/// Full-height page section anchored at `#id`
pub fn section(id: &'static str, snapshot: &RenderSnapshot) -> Element {
    section_el()
        .id(id)
        .style(snapshot.style(StyleRole::Section))
}

pub fn heading(text: &'static str, snapshot: &RenderSnapshot) -> Element {
    h2().style(snapshot.style(StyleRole::SectionHeading)).text(text)
}

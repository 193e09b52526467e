//! Frosted glass card with a glossy top highlight

use crate::snapshot::RenderSnapshot;
use crate::view::{div, Element};
use folio_theme::StyleRole;

pub fn glass_card(snapshot: &RenderSnapshot) -> Element {
    div()
        .style(snapshot.style(StyleRole::Card))
        .child(div().style(snapshot.style(StyleRole::CardGloss)))
}

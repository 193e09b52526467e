//! Page components
//!
//! Each component is a plain function from a [`RenderSnapshot`] to a view
//! element. Styling goes through [`RenderSnapshot::style`]; components never
//! look at the dark or scrolled flags directly.

pub mod about;
pub mod card;
pub mod connect;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod section;
pub mod skills;

use crate::snapshot::RenderSnapshot;
use crate::view::{div, main, Node};
use folio_theme::{ColorScheme, StyleRole};

/// Root element id of the rendered page
pub const PAGE_ID: &str = "page";

/// Compose the whole page for one snapshot
pub fn render(snapshot: &RenderSnapshot) -> Node {
    div()
        .id(PAGE_ID)
        .style(snapshot.style(StyleRole::Page))
        .attr("data-theme", ColorScheme::from_dark(snapshot.dark).as_str())
        .child(div().style(snapshot.style(StyleRole::Backdrop)))
        .child(navbar::render(snapshot))
        .child(
            main()
                .class("relative z-10")
                .child(hero::render(snapshot))
                .child(skills::render(snapshot))
                .child(about::render(snapshot))
                .child(projects::render(snapshot))
                .child(education::render(snapshot))
                .child(experience::render(snapshot))
                .child(connect::render(snapshot)),
        )
        .child(footer::render(snapshot))
        .into_node()
}

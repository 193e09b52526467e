use super::section::{heading, section};
use crate::content::ABOUT;
use crate::snapshot::RenderSnapshot;
use crate::view::{div, p, Element};
use folio_theme::StyleRole;

pub const ABOUT_ID: &str = "about";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    let paragraphs = ABOUT
        .iter()
        .map(|text| p().style(snapshot.style(StyleRole::Body)).text(*text));

    section(ABOUT_ID, snapshot)
        .child(heading("About", snapshot))
        .child(div().class("max-w-3xl space-y-6").children(paragraphs))
}

use super::section::{heading, section};
use crate::content::CONNECT;
use crate::snapshot::RenderSnapshot;
use crate::view::{a, p, Element};
use folio_theme::StyleRole;

pub const CONNECT_ID: &str = "connect";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    section(CONNECT_ID, snapshot)
        .class("items-start")
        .child(heading(CONNECT.heading, snapshot))
        .child(
            p().style(snapshot.style(StyleRole::Body))
                .class("max-w-xl mb-8")
                .text(CONNECT.body),
        )
        .child(
            a().id("connect-cta")
                .style(snapshot.style(StyleRole::PrimaryButton))
                .attr("href", CONNECT.email)
                .text(CONNECT.cta),
        )
}

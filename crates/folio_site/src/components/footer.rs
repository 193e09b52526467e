//! Footer with name, location, socials and copyright

use crate::content::{COPYRIGHT, PROFILE, SOCIALS};
use crate::snapshot::RenderSnapshot;
use crate::view::{a, div, footer, h2, p, Element};
use folio_theme::StyleRole;

pub const FOOTER_ID: &str = "footer";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    let socials = SOCIALS.iter().map(|social| {
        a().style(snapshot.style(StyleRole::SocialIcon))
            .attr("href", social.href)
            .attr("aria-label", social.label)
            .attr("data-icon", social.icon)
    });

    footer().id(FOOTER_ID).style(snapshot.style(StyleRole::Footer)).child(
        div()
            .class("max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center gap-6")
            .child(
                div()
                    .child(h2().class("font-dot text-2xl").text(PROFILE.short_name))
                    .child(
                        p().style(snapshot.style(StyleRole::Muted))
                            .class("text-sm")
                            .text(PROFILE.location),
                    ),
            )
            .child(div().id("socials").class("flex gap-6").children(socials))
            .child(p().style(snapshot.style(StyleRole::Caption)).text(COPYRIGHT)),
    )
}

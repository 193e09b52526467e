//! Hero: greeting, dot-matrix name, title, calls to action and portrait

use super::section::section;
use crate::content::PROFILE;
use crate::motion;
use crate::snapshot::RenderSnapshot;
use crate::view::{a, br, div, h1, img, p, span, Element};
use folio_theme::StyleRole;

pub const HERO_ID: &str = "home";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    let mut name = h1()
        .id("hero-name")
        .style(snapshot.style(StyleRole::DisplayName))
        .class(motion::NAME);
    for (i, line) in PROFILE.name_lines.iter().enumerate() {
        if i > 0 {
            name = name.child(br());
        }
        name = name.text(*line);
    }

    let text = div()
        .class("flex-1 space-y-8 z-10")
        .child(
            p().style(snapshot.style(StyleRole::Eyebrow))
                .class(motion::GREETING)
                .text(PROFILE.greeting),
        )
        .child(name)
        .child(
            p().id("hero-title")
                .style(snapshot.style(StyleRole::Tagline))
                .class(motion::TAGLINE)
                .text(PROFILE.title),
        )
        .child(
            div()
                .class("flex gap-4 pt-4")
                .class(motion::ACTIONS)
                .child(
                    a().id("resume-button")
                        .style(snapshot.style(StyleRole::PrimaryButton))
                        .attr("href", PROFILE.resume)
                        .child(span().attr("data-icon", "arrow-up-right").attr("aria-hidden", "true"))
                        .text("Resume"),
                )
                .child(
                    a().id("contact-button")
                        .style(snapshot.style(StyleRole::SecondaryButton))
                        .attr("href", "#connect")
                        .text("Contact Me"),
                ),
        );

    let portrait = div()
        .class("flex-1 relative w-full max-w-md lg:max-w-lg z-10")
        .child(
            div()
                .style(snapshot.style(StyleRole::Portrait))
                .class(motion::PORTRAIT)
                .child(
                    img()
                        .class("w-full h-full object-cover")
                        .attr("src", PROFILE.portrait)
                        .attr("alt", "Portrait"),
                )
                .child(div().style(snapshot.style(StyleRole::PortraitOverlay))),
        );

    section(HERO_ID, snapshot)
        .class("pt-32 lg:pt-0 min-h-[90vh]")
        .child(
            div()
                .class("flex flex-col-reverse lg:flex-row items-center justify-between gap-12")
                .child(text)
                .child(portrait),
        )
}

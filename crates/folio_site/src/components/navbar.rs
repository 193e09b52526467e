//! Floating navbar
//!
//! Solid pill at the top of the page; turns to frosted glass once the scroll
//! observer reports the threshold was passed. Carries the live date label and
//! the sun/moon theme toggle.

use crate::content::{NAV_LINKS, PROFILE};
use crate::motion;
use crate::snapshot::RenderSnapshot;
use crate::view::{a, button, div, img, nav, span, Element};
use folio_theme::{StyleRole, THEME_TOGGLE_ID};

pub const NAVBAR_ID: &str = "navbar";
pub const DATE_BADGE_ID: &str = "date-badge";

pub fn render(snapshot: &RenderSnapshot) -> Element {
    let links = NAV_LINKS.iter().map(|link| {
        a().style(snapshot.style(StyleRole::NavLink))
            .attr("href", link.anchor)
            .text(link.label)
    });

    let toggle_icon = if snapshot.dark { "sun" } else { "moon" };

    div().style(snapshot.style(StyleRole::NavShell)).child(
        nav()
            .id(NAVBAR_ID)
            .style(snapshot.style(StyleRole::NavBar))
            .class(motion::NAV_DROP_IN)
            .attr("data-scrolled", snapshot.scrolled.to_string())
            .child(
                a().id("home-link").attr("href", "#home").child(
                    img()
                        .class("w-6 h-6")
                        .attr("src", PROFILE.home_icon)
                        .attr("alt", "Home"),
                ),
            )
            .child(
                div()
                    .class("hidden md:flex items-center gap-8 text-sm font-bold tracking-tighter")
                    .children(links),
            )
            .child(
                span()
                    .id(DATE_BADGE_ID)
                    .style(snapshot.style(StyleRole::DateBadge))
                    .text(snapshot.date_label.as_str()),
            )
            .child(
                button()
                    .id(THEME_TOGGLE_ID)
                    .style(snapshot.style(StyleRole::ThemeToggle))
                    .attr("type", "button")
                    .attr("aria-label", "Toggle theme")
                    .attr("data-icon", toggle_icon),
            )
            .child(
                div()
                    .class("md:hidden")
                    .child(span().style(snapshot.style(StyleRole::NavMenu)).text("MENU")),
            ),
    )
}

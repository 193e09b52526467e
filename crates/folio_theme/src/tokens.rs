//! Style roles and class sets
//!
//! A [`StyleRole`] names what an element *is* on the page; the theme turns a
//! role into the utility classes that draw it. Class vocabulary is Tailwind's.

use smallvec::SmallVec;
use std::fmt;

/// Semantic role of a styled element
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum StyleRole {
    // Page chrome
    Page,
    Backdrop,
    NavShell,
    NavBar,
    NavLink,
    NavMenu,
    DateBadge,
    ThemeToggle,

    // Layout
    Section,
    SectionHeading,

    // Text
    Eyebrow,
    DisplayName,
    Tagline,
    Body,
    Muted,
    Caption,

    // Controls
    PrimaryButton,
    SecondaryButton,

    // Surfaces
    Card,
    CardGloss,
    Badge,
    Thumbnail,
    Portrait,
    PortraitOverlay,

    // Skills
    MarqueeViewport,
    MarqueeTrack,
    MarqueeItem,
    SkillIcon,
    Chip,

    // Timeline / experience
    TimelineRail,
    TimelineDot,
    DateChip,

    // Footer
    Footer,
    SocialIcon,
}

impl StyleRole {
    pub const ALL: [StyleRole; 34] = [
        StyleRole::Page,
        StyleRole::Backdrop,
        StyleRole::NavShell,
        StyleRole::NavBar,
        StyleRole::NavLink,
        StyleRole::NavMenu,
        StyleRole::DateBadge,
        StyleRole::ThemeToggle,
        StyleRole::Section,
        StyleRole::SectionHeading,
        StyleRole::Eyebrow,
        StyleRole::DisplayName,
        StyleRole::Tagline,
        StyleRole::Body,
        StyleRole::Muted,
        StyleRole::Caption,
        StyleRole::PrimaryButton,
        StyleRole::SecondaryButton,
        StyleRole::Card,
        StyleRole::CardGloss,
        StyleRole::Badge,
        StyleRole::Thumbnail,
        StyleRole::Portrait,
        StyleRole::PortraitOverlay,
        StyleRole::MarqueeViewport,
        StyleRole::MarqueeTrack,
        StyleRole::MarqueeItem,
        StyleRole::SkillIcon,
        StyleRole::Chip,
        StyleRole::TimelineRail,
        StyleRole::TimelineDot,
        StyleRole::DateChip,
        StyleRole::Footer,
        StyleRole::SocialIcon,
    ];

    /// Stable kebab-case name, used as the element's `data-role`
    pub fn name(self) -> &'static str {
        match self {
            StyleRole::Page => "page",
            StyleRole::Backdrop => "backdrop",
            StyleRole::NavShell => "nav-shell",
            StyleRole::NavBar => "nav-bar",
            StyleRole::NavLink => "nav-link",
            StyleRole::NavMenu => "nav-menu",
            StyleRole::DateBadge => "date-badge",
            StyleRole::ThemeToggle => "theme-toggle",
            StyleRole::Section => "section",
            StyleRole::SectionHeading => "section-heading",
            StyleRole::Eyebrow => "eyebrow",
            StyleRole::DisplayName => "display-name",
            StyleRole::Tagline => "tagline",
            StyleRole::Body => "body",
            StyleRole::Muted => "muted",
            StyleRole::Caption => "caption",
            StyleRole::PrimaryButton => "primary-button",
            StyleRole::SecondaryButton => "secondary-button",
            StyleRole::Card => "card",
            StyleRole::CardGloss => "card-gloss",
            StyleRole::Badge => "badge",
            StyleRole::Thumbnail => "thumbnail",
            StyleRole::Portrait => "portrait",
            StyleRole::PortraitOverlay => "portrait-overlay",
            StyleRole::MarqueeViewport => "marquee-viewport",
            StyleRole::MarqueeTrack => "marquee-track",
            StyleRole::MarqueeItem => "marquee-item",
            StyleRole::SkillIcon => "skill-icon",
            StyleRole::Chip => "chip",
            StyleRole::TimelineRail => "timeline-rail",
            StyleRole::TimelineDot => "timeline-dot",
            StyleRole::DateChip => "date-chip",
            StyleRole::Footer => "footer",
            StyleRole::SocialIcon => "social-icon",
        }
    }

    /// Classes every variant of this role shares
    pub fn base(self) -> &'static str {
        match self {
            StyleRole::Page => "relative min-h-screen overflow-x-hidden transition-colors duration-500",
            StyleRole::Backdrop => "halftone fixed inset-0 z-0 opacity-[0.03] pointer-events-none",
            StyleRole::NavShell => "fixed top-6 left-0 right-0 z-50 flex justify-center px-4",
            StyleRole::NavBar => {
                "flex items-center gap-8 px-8 py-3 rounded-full transition-all duration-300"
            }
            StyleRole::NavLink => "hover:opacity-60 transition-opacity",
            StyleRole::NavMenu => "md:hidden font-bold text-xs",
            StyleRole::DateBadge => "hidden lg:inline font-mono text-xs tracking-tight",
            StyleRole::ThemeToggle => "flex items-center justify-center w-8 h-8 rounded-full transition-colors",
            StyleRole::Section => {
                "min-h-screen w-full px-6 py-24 max-w-7xl mx-auto flex flex-col justify-center"
            }
            StyleRole::SectionHeading => "font-dot text-4xl mb-12 uppercase",
            StyleRole::Eyebrow => "text-lg",
            StyleRole::DisplayName => {
                "font-dot text-6xl md:text-8xl lg:text-9xl leading-[0.9] tracking-tight uppercase"
            }
            StyleRole::Tagline => "font-dot text-2xl md:text-3xl uppercase tracking-widest",
            StyleRole::Body => "text-base leading-relaxed",
            StyleRole::Muted => "",
            StyleRole::Caption => "text-xs mt-1",
            StyleRole::PrimaryButton => {
                "flex items-center gap-2 px-8 py-3 rounded-full transition-colors"
            }
            StyleRole::SecondaryButton => {
                "flex items-center gap-2 px-8 py-3 rounded-full transition-colors"
            }
            StyleRole::Card => {
                "relative overflow-hidden rounded-2xl p-8 backdrop-blur-md border transition-transform duration-300 hover:-translate-y-1"
            }
            StyleRole::CardGloss => {
                "absolute top-0 left-0 w-full h-1/2 bg-gradient-to-b to-transparent pointer-events-none"
            }
            StyleRole::Badge => "text-xs font-bold border px-2 py-1 rounded-full",
            StyleRole::Thumbnail => "w-full h-32 rounded-lg mt-4 overflow-hidden relative",
            StyleRole::Portrait => {
                "relative aspect-[3/4] rounded-[3rem] overflow-hidden grayscale contrast-125"
            }
            StyleRole::PortraitOverlay => {
                "halftone-overlay absolute inset-0 mix-blend-overlay opacity-50 pointer-events-none"
            }
            StyleRole::MarqueeViewport => "relative w-full overflow-hidden py-6",
            StyleRole::MarqueeTrack => "marquee-track flex w-max",
            StyleRole::MarqueeItem => {
                "flex items-center gap-3 pr-12 whitespace-nowrap text-lg font-bold"
            }
            StyleRole::SkillIcon => "w-8 h-8",
            StyleRole::Chip => {
                "px-4 py-2 border rounded-full transition-colors cursor-default"
            }
            StyleRole::TimelineRail => "space-y-8 pl-4 border-l-2",
            StyleRole::TimelineDot => "absolute -left-[21px] top-1 w-3 h-3 rounded-full",
            StyleRole::DateChip => "font-mono text-sm px-3 py-1 rounded-full",
            StyleRole::Footer => "w-full py-12 px-6 border-t mt-12 backdrop-blur-sm",
            StyleRole::SocialIcon => "hover:scale-110 transition-transform cursor-pointer",
        }
    }
}

/// An ordered, de-duplicated set of utility classes
///
/// Sets produced by [`style_for`](crate::style_for) remember the role they
/// were selected for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: SmallVec<[&'static str; 8]>,
    role: Option<StyleRole>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: StyleRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Role these classes were selected for, if any
    pub fn role(&self) -> Option<StyleRole> {
        self.role
    }

    /// Split a whitespace-separated class string
    pub fn parse(classes: &'static str) -> Self {
        let mut set = Self::new();
        set.extend_str(classes);
        set
    }

    pub fn push(&mut self, class: &'static str) {
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    pub fn extend_str(&mut self, classes: &'static str) {
        for class in classes.split_whitespace() {
            self.push(class);
        }
    }

    pub fn with(mut self, classes: &'static str) -> Self {
        self.extend_str(classes);
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

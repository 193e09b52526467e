//! Dark scheme: the light tables with ink and paper swapped

use crate::tokens::StyleRole;

pub fn variant(role: StyleRole, scrolled: bool) -> &'static str {
    match role {
        StyleRole::Page => "bg-[#0f0f0f] text-[#ededed]",
        StyleRole::Backdrop => "",
        StyleRole::NavShell => "",
        StyleRole::NavBar if scrolled => {
            "bg-black/40 backdrop-blur-xl border border-white/10 shadow-lg shadow-black/40"
        }
        StyleRole::NavBar => "bg-white text-black",
        StyleRole::NavLink if scrolled => "text-white",
        StyleRole::NavLink => "text-black",
        StyleRole::NavMenu if scrolled => "text-white",
        StyleRole::NavMenu => "text-black",
        StyleRole::DateBadge if scrolled => "text-gray-400",
        StyleRole::DateBadge => "text-gray-600",
        StyleRole::ThemeToggle if scrolled => "bg-white/10 text-white hover:bg-white/20",
        StyleRole::ThemeToggle => "bg-black/5 text-black hover:bg-black/10",
        StyleRole::Section => "",
        StyleRole::SectionHeading => "text-white",
        StyleRole::Eyebrow => "text-gray-400",
        StyleRole::DisplayName => "text-white",
        StyleRole::Tagline => "text-gray-300",
        StyleRole::Body => "text-gray-300",
        StyleRole::Muted => "text-gray-400",
        StyleRole::Caption => "text-gray-500",
        StyleRole::PrimaryButton => "bg-white text-black hover:bg-gray-200",
        StyleRole::SecondaryButton => "bg-gray-800 text-white hover:bg-gray-700",
        StyleRole::Card => {
            "bg-white/5 border-white/10 shadow-[0_8px_32px_0_rgba(0,0,0,0.4)]"
        }
        StyleRole::CardGloss => "from-white/10",
        StyleRole::Badge => "border-white",
        StyleRole::Thumbnail => "bg-gray-800/50",
        StyleRole::Portrait => "brightness-90",
        StyleRole::PortraitOverlay => "",
        StyleRole::MarqueeViewport => "",
        StyleRole::MarqueeTrack => "text-white",
        StyleRole::MarqueeItem => "text-gray-200",
        StyleRole::SkillIcon => "invert-0",
        StyleRole::Chip => "bg-black border-gray-700 hover:bg-white hover:text-black",
        StyleRole::TimelineRail => "border-gray-700",
        StyleRole::TimelineDot => "bg-white",
        StyleRole::DateChip => "bg-white/10",
        StyleRole::Footer => "border-gray-800 bg-black/50",
        StyleRole::SocialIcon => "text-white",
    }
}

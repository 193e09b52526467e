//! Light scheme: near-white paper, black ink

use crate::tokens::StyleRole;

pub fn variant(role: StyleRole, scrolled: bool) -> &'static str {
    match role {
        StyleRole::Page => "bg-[#FAFAFA] text-[#1a1a1a]",
        StyleRole::Backdrop => "",
        StyleRole::NavShell => "",
        StyleRole::NavBar if scrolled => {
            "bg-white/40 backdrop-blur-xl border border-white/30 shadow-lg shadow-black/5"
        }
        StyleRole::NavBar => "bg-black text-white",
        StyleRole::NavLink if scrolled => "text-black",
        StyleRole::NavLink => "text-white",
        StyleRole::NavMenu if scrolled => "text-black",
        StyleRole::NavMenu => "text-white",
        StyleRole::DateBadge if scrolled => "text-gray-600",
        StyleRole::DateBadge => "text-gray-300",
        StyleRole::ThemeToggle if scrolled => "bg-black/5 text-black hover:bg-black/10",
        StyleRole::ThemeToggle => "bg-white/10 text-white hover:bg-white/20",
        StyleRole::Section => "",
        StyleRole::SectionHeading => "text-black",
        StyleRole::Eyebrow => "text-gray-500",
        StyleRole::DisplayName => "text-black",
        StyleRole::Tagline => "text-gray-600",
        StyleRole::Body => "text-gray-700",
        StyleRole::Muted => "text-gray-500",
        StyleRole::Caption => "text-gray-400",
        StyleRole::PrimaryButton => "bg-black text-white hover:bg-gray-800",
        StyleRole::SecondaryButton => "bg-gray-200 text-black hover:bg-gray-300",
        StyleRole::Card => {
            "bg-white/40 border-white/60 shadow-[0_8px_32px_0_rgba(0,0,0,0.05)]"
        }
        StyleRole::CardGloss => "from-white/40",
        StyleRole::Badge => "border-black",
        StyleRole::Thumbnail => "bg-gray-200/50",
        StyleRole::Portrait => "",
        StyleRole::PortraitOverlay => "",
        StyleRole::MarqueeViewport => "",
        StyleRole::MarqueeTrack => "text-black",
        StyleRole::MarqueeItem => "text-gray-800",
        StyleRole::SkillIcon => "",
        StyleRole::Chip => "bg-white border-gray-200 hover:bg-black hover:text-white",
        StyleRole::TimelineRail => "border-gray-200",
        StyleRole::TimelineDot => "bg-black",
        StyleRole::DateChip => "bg-black/5",
        StyleRole::Footer => "border-gray-200 bg-white/50",
        StyleRole::SocialIcon => "text-black",
    }
}

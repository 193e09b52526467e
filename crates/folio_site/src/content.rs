//! Static page content
//!
//! Every string the page displays lives here. Lists are fixed at compile time
//! and rendered in declaration order.

/// Who the page is about
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub greeting: &'static str,
    /// Display name, one line per word
    pub name_lines: &'static [&'static str],
    pub short_name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub portrait: &'static str,
    pub home_icon: &'static str,
    pub resume: &'static str,
}

pub const PROFILE: Profile = Profile {
    greeting: "Hi, I am",
    name_lines: &["Safal", "Narshing", "Shrestha"],
    short_name: "Safal N. Shrestha",
    title: "ML/AI Engineer",
    location: "Kathmandu, Nepal",
    portrait: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=1000&auto=format&fit=crop",
    home_icon: "/favicon.svg",
    resume: "/resume.pdf",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Projects", anchor: "#projects" },
    NavLink { label: "Experience", anchor: "#experience" },
    NavLink { label: "Education", anchor: "#education" },
    NavLink { label: "Skills", anchor: "#skills" },
];

/// Employment type shown next to a job
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    FullTime,
    Research,
    Internship,
}

impl JobKind {
    pub fn label(self) -> &'static str {
        match self {
            JobKind::FullTime => "Full-time",
            JobKind::Research => "Research",
            JobKind::Internship => "Internship",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub kind: JobKind,
}

pub const JOBS: &[JobEntry] = &[
    JobEntry {
        role: "Senior ML Engineer",
        company: "TechCorp Nepal",
        date: "2023 - Present",
        kind: JobKind::FullTime,
    },
    JobEntry {
        role: "AI Researcher",
        company: "Kathmandu University",
        date: "2021 - 2023",
        kind: JobKind::Research,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub icon: &'static str,
}

macro_rules! devicon {
    ($path:literal) => {
        concat!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/", $path)
    };
}

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry { name: "Python", icon: devicon!("python/python-original.svg") },
    SkillEntry { name: "TensorFlow", icon: devicon!("tensorflow/tensorflow-original.svg") },
    SkillEntry { name: "PyTorch", icon: devicon!("pytorch/pytorch-original.svg") },
    SkillEntry { name: "React", icon: devicon!("react/react-original.svg") },
    SkillEntry { name: "TypeScript", icon: devicon!("typescript/typescript-original.svg") },
    SkillEntry {
        name: "AWS",
        icon: devicon!("amazonwebservices/amazonwebservices-original-wordmark.svg"),
    },
    SkillEntry { name: "Docker", icon: devicon!("docker/docker-original.svg") },
    SkillEntry { name: "NLP", icon: "https://cdn.simpleicons.org/huggingface" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub date: &'static str,
}

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    degree: "Bachelors in Computer Engineering",
    school: "Kathmandu University",
    date: "2019 - 2023",
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub year: &'static str,
    pub description: &'static str,
}

const VISUALIZER: ProjectEntry = ProjectEntry {
    title: "Neural Network Visualizer",
    year: "2024",
    description: "A web-based tool to visualize backpropagation in real-time using React and TensorFlow.js.",
};

pub const PROJECTS: &[ProjectEntry] = &[VISUALIZER, VISUALIZER, VISUALIZER, VISUALIZER];

pub const ABOUT: &[&str] = &[
    "I build machine learning systems that leave the notebook and hold up in production.",
    "Most of my work sits between research and engineering: training models, shaping the data they learn from, and serving them behind clean interfaces.",
    "Outside of work I read papers, tinker with small web tools, and explain neural networks to anyone who will listen.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connect {
    pub heading: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
    pub email: &'static str,
}

pub const CONNECT: Connect = Connect {
    heading: "Let's Connect",
    body: "Have a project in mind or just want to talk about ML? My inbox is open.",
    cta: "Say Hello",
    email: "mailto:hello@safal.dev",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    /// Icon name in the lucide set
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIALS: &[SocialLink] = &[
    SocialLink { label: "Github", icon: "github", href: "https://github.com/" },
    SocialLink { label: "Linkedin", icon: "linkedin", href: "https://www.linkedin.com/" },
    SocialLink { label: "Mail", icon: "mail", href: "mailto:hello@safal.dev" },
];

pub const COPYRIGHT: &str = "© 2026. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_names_are_unique() {
        for (i, a) in SKILLS.iter().enumerate() {
            for b in &SKILLS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn nav_anchors_are_fragments() {
        assert!(NAV_LINKS.iter().all(|link| link.anchor.starts_with('#')));
    }
}

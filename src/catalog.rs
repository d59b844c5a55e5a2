//! Compiled-in page content. Slice order is display order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Palette,
    Zap,
    Github,
    Linkedin,
    Twitter,
    Mail,
}

impl Icon {
    /// Brand icons come from the devicon font; the rest render as a glyph.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Twitter => "devicon-twitter-original",
            Icon::Code | Icon::Palette | Icon::Zap | Icon::Mail => "not-italic",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Palette => "🎨",
            Icon::Zap => "⚡",
            Icon::Mail => "✉",
            Icon::Github | Icon::Linkedin | Icon::Twitter => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub resume_path: &'static str,
    pub resume_download: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub footer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStats {
    pub views: &'static str,
    pub stars: &'static str,
    pub users: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub stats: ProjectStats,
    pub code_url: &'static str,
    pub demo_url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Percentage, 0 to 100.
    pub level: u8,
    pub icon: Icon,
    pub gradient: &'static str,
}

impl SkillEntry {
    pub fn width_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

impl SocialLink {
    pub fn aria_label(&self) -> String {
        format!("Visit {} profile", self.label)
    }
}

static PROFILE: Profile = Profile {
    name: "Harisahmed",
    role: "Developer",
    tagline: "Crafting immersive digital experiences with cutting-edge animations and modern web technologies",
    about: &[
        "I'm a passionate creative developer who bridges the gap between design and technology. With over 4 years of experience, I specialize in creating immersive digital experiences that captivate users and drive engagement.",
        "Creative and detail-oriented Frontend Developer passionate about building responsive, accessible, and user-centric web applications. Proficient in React.js, Tailwind CSS, Material UI, and JavaScript, with hands-on experience developing dynamic UI components and single-page applications. Skilled in integrating backend systems using Node.js, PHP, and MySQL. Currently exploring the MERN stack (MongoDB, Express.js, React.js, Node.js) and modern frameworks like Next.js and Framer Motion to deliver seamless, high-performance digital experiences.",
    ],
    resume_path: "/Harisahmed.pdf",
    resume_download: "Resume.pdf",
    email: "hmtechnicalpoint20@gmail.com",
    location: "Gandhinagar, Gujarat, India",
    availability: "Available for internships & projects",
    footer: "BCA Student Portfolio - KSV University, Gandhinagar. Built with passion for modern web technologies.",
};

static STATS: [Stat; 3] = [
    Stat {
        value: "10+",
        label: "Projects Built",
        accent: "text-purple-400",
    },
    Stat {
        value: "3+",
        label: "Years Learning",
        accent: "text-pink-400",
    },
    Stat {
        value: "2026",
        label: "Graduation Year",
        accent: "text-cyan-400",
    },
];

static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "AI-Powered Resume Builder",
        category: "AI Integration & Frontend",
        description: "A smart resume generator where users input career details, and the system creates multiple tailored resume templates with AI-driven personalization.",
        tech: &["React.js", "Tailwind CSS", "Node.js", "OpenAI API", "PDF Export"],
        image: "/Resume_Builder.png",
        stats: ProjectStats {
            views: "42K",
            stars: "2.1K",
            users: "12K",
        },
        code_url: "https://github.com/Harismunshi",
        demo_url: "https://github.com/Harismunshi",
    },
    Project {
        id: 2,
        title: "Real-Time Collaboration Whiteboard",
        category: "Real-Time Communication",
        description: "A collaborative online whiteboard enabling multiple users to draw, type, and brainstorm in real-time with live cursors and interactive features.",
        tech: &["React.js", "Material UI", "Socket.io", "Node.js", "Canvas API"],
        image: "/Whiteboard.png",
        stats: ProjectStats {
            views: "38K",
            stars: "1.9K",
            users: "9K",
        },
        code_url: "https://github.com/Harismunshi",
        demo_url: "https://github.com/Harismunshi",
    },
    Project {
        id: 3,
        title: "Creative Portfolio Website with Animations",
        category: "Animation & UI/UX Design",
        description: "A visually engaging portfolio website with smooth parallax scrolling, timeline animations, and micro-interactions using advanced animation frameworks.",
        tech: &["React.js", "GSAP", "Framer Motion", "Tailwind CSS", "WebGL"],
        image: "/Portfolio_UI.png",
        stats: ProjectStats {
            views: "35K",
            stars: "1.7K",
            users: "7K",
        },
        code_url: "https://github.com/Harismunshi",
        demo_url: "https://github.com/Harismunshi",
    },
];

static SKILLS: [SkillEntry; 3] = [
    SkillEntry {
        name: "Frontend Development",
        level: 95,
        icon: Icon::Code,
        gradient: "from-blue-500 to-cyan-500",
    },
    SkillEntry {
        name: "UI/UX Design",
        level: 80,
        icon: Icon::Palette,
        gradient: "from-purple-500 to-pink-500",
    },
    SkillEntry {
        name: "Animation & Motion",
        level: 70,
        icon: Icon::Zap,
        gradient: "from-green-500 to-teal-500",
    },
];

static TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        year: "2026",
        title: "BCA Graduate",
        organization: "KSV University, Gandhinagar",
        description: "Graduating with Bachelor's of Computer Application, specializing in modern web technologies and software development.",
    },
    TimelineEntry {
        year: "2025",
        title: "Advanced Projects & Internships",
        organization: "Final Year Focus",
        description: "Building complex full-stack applications, integrating AI technologies, and developing real-time collaborative platforms.",
    },
    TimelineEntry {
        year: "2024",
        title: "Full-Stack Development Mastery",
        organization: "Third Year Studies",
        description: "Mastered React.js, Node.js, database management, and started working on professional-level projects with modern frameworks.",
    },
    TimelineEntry {
        year: "2023",
        title: "BCA Journey Begins",
        organization: "KSV University, Gandhinagar",
        description: "Started Bachelor's in Computer Application, learning programming fundamentals, web development, and building first projects.",
    },
];

static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/Harismunshi",
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/harismunshi",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Twitter",
        url: "https://twitter.com",
        icon: Icon::Twitter,
    },
    SocialLink {
        label: "Email",
        url: "mailto:hmtechnicalpoint20@gmail.com",
        icon: Icon::Mail,
    },
];

pub fn profile() -> &'static Profile {
    &PROFILE
}

pub fn stats() -> &'static [Stat] {
    &STATS
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn skills() -> &'static [SkillEntry] {
    &SKILLS
}

pub fn timeline() -> &'static [TimelineEntry] {
    &TIMELINE
}

pub fn social_links() -> &'static [SocialLink] {
    &SOCIAL_LINKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_are_stable() {
        assert_eq!(projects().len(), 3);
        assert_eq!(skills().len(), 3);
        assert_eq!(timeline().len(), 4);
        assert_eq!(social_links().len(), 4);

        assert!(std::ptr::eq(projects(), projects()));
        assert_eq!(projects(), projects());
        assert_eq!(timeline(), timeline());
    }

    #[test]
    fn test_display_order() {
        let ids: Vec<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);

        let years: Vec<_> = timeline().iter().map(|t| t.year).collect();
        assert_eq!(years, ["2026", "2025", "2024", "2023"]);

        let labels: Vec<_> = social_links().iter().map(|s| s.label).collect();
        assert_eq!(labels, ["GitHub", "LinkedIn", "Twitter", "Email"]);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for skill in skills() {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
        assert_eq!(skills()[0].width_style(), "width: 95%");
    }

    #[test]
    fn test_links_and_assets_are_absolute() {
        for project in projects() {
            assert!(project.image.starts_with('/'), "{}", project.title);
            assert!(project.code_url.starts_with("https://"));
            assert!(!project.tech.is_empty());
        }
        for link in social_links() {
            assert!(link.url.starts_with("https://") || link.url.starts_with("mailto:"));
        }
        assert_eq!(social_links()[0].aria_label(), "Visit GitHub profile");
        assert!(profile().resume_path.ends_with(".pdf"));
    }
}

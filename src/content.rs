//! Static page content. Plain records, no behavior.

pub const OWNER: &str = "Ishan Karki";
pub const HEADLINE: &str = "ISHAN KARKI";
pub const ROLE: &str = "MERN Stack Developer";
pub const CV_PATH: &str = "/Ishan_Karki_CV_.pdf";
pub const CV_FILE_NAME: &str = "Ishan_Karki_CV_.pdf";
pub const PORTRAIT: &str = "/ishan.svg";
pub const FAVICON: &str = "/favicon.svg";

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Timeline", href: "#timeline" },
    NavItem { name: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct Social {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl Social {
    /// Devicon / extra icon class for the link.
    pub fn icon(&self) -> &'static str {
        match self.kind {
            SocialKind::GitHub => "devicon-github-plain",
            SocialKind::LinkedIn => "devicon-linkedin-plain",
            SocialKind::Email => "extra-email",
        }
    }

    /// Mail links open in place; everything else in a new tab.
    pub fn is_external(&self) -> bool {
        self.kind != SocialKind::Email
    }
}

pub const SOCIALS: [Social; 3] = [
    Social {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: "https://github.com/Dr-Vegapunk",
    },
    Social {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com/in/ishan-karki-1a9274256",
    },
    Social {
        kind: SocialKind::Email,
        label: "Email",
        href: "mailto:Ishankarki7624@gmail.com",
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a passionate MERN stack developer with a strong foundation in web development. Currently pursuing my Bachelor's degree from ISMT College (University of Sunderland), I'm also enhancing my skills through a MERN Stack course at Broadway Institution.",
    "My journey in tech is driven by curiosity and a desire to create meaningful digital experiences. I enjoy building responsive, user-friendly applications and am constantly learning new technologies to improve my craft.",
    "When I'm not coding, I'm exploring new technologies, contributing to open-source projects, or expanding my knowledge in web development.",
];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 8] = [
    SkillGroup {
        title: "Frontend",
        icon: "extra-layout",
        items: &["HTML", "CSS", "Tailwind CSS", "JavaScript", "React", "Next.js"],
    },
    SkillGroup {
        title: "Backend",
        icon: "extra-server",
        items: &["Node.js", "Express.js", "REST API"],
    },
    SkillGroup {
        title: "Database",
        icon: "extra-database",
        items: &["MongoDB", "Mongoose"],
    },
    SkillGroup {
        title: "UI Libraries",
        icon: "extra-palette",
        items: &["Shadcn UI", "Hero UI", "Material UI"],
    },
    SkillGroup {
        title: "State Management",
        icon: "extra-layers",
        items: &["Redux Toolkit", "Context API"],
    },
    SkillGroup {
        title: "Form Handling",
        icon: "extra-file-code",
        items: &["Formik", "Yup"],
    },
    SkillGroup {
        title: "Authentication",
        icon: "extra-shield",
        items: &["JWT (JSON Web Tokens)"],
    },
    SkillGroup {
        title: "AI Tools",
        icon: "extra-code",
        items: &["V0", "Bolt", "Easel"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_link: &'static str,
    pub github_link: &'static str,
    pub in_progress: bool,
}

const GITHUB: &str = "https://github.com/Dr-Vegapunk";
const PLACEHOLDER: &str = "/placeholder.svg";

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "SajiloMart",
        description: "A full-stack e-commerce platform built using the MERN stack. Features product browsing, user authentication, cart management, and order processing.",
        image: PLACEHOLDER,
        tags: &["React", "Next.js", "MongoDB", "Express", "Node.js"],
        demo_link: "#",
        github_link: GITHUB,
        in_progress: true,
    },
    Project {
        title: "Sikshyalaya",
        description: "A smart schooling solution group project made in Broadway Institution. Provides comprehensive tools for educational management.",
        image: PLACEHOLDER,
        tags: &["React", "Node.js", "MongoDB", "Express"],
        demo_link: "#",
        github_link: GITHUB,
        in_progress: false,
    },
    Project {
        title: "Samajik",
        description: "A simple social media app group project made in Broadway Institution. Allows users to connect, share content, and interact.",
        image: PLACEHOLDER,
        tags: &["React", "Node.js", "MongoDB", "Express"],
        demo_link: "#",
        github_link: GITHUB,
        in_progress: false,
    },
    Project {
        title: "E-Commerce Admin Dashboard",
        description: "Developed using the Platzi Fake API. Features product, order, and user account management with a user-friendly and responsive design.",
        image: PLACEHOLDER,
        tags: &["React", "Tailwind CSS", "REST API"],
        demo_link: "#",
        github_link: GITHUB,
        in_progress: false,
    },
    Project {
        title: "Portfolio Website",
        description: "Personal portfolio showcasing skills and projects using React and React Hooks.",
        image: PLACEHOLDER,
        tags: &["React", "Tailwind CSS"],
        demo_link: "#",
        github_link: GITHUB,
        in_progress: false,
    },
    Project {
        title: "Rock-Paper-Scissors Game",
        description: "A simple rock paper scissor game using React. Uses React hooks (useState and useEffect) to manage the game state and side effects efficiently.",
        image: PLACEHOLDER,
        tags: &["React", "CSS", "JavaScript"],
        demo_link: "#",
        github_link: GITHUB,
        in_progress: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Education,
    Certificate,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Education => "Education",
            EntryKind::Certificate => "Certificate",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub kind: EntryKind,
}

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        title: "Bachelor's Degree",
        subtitle: "ISMT College (University of Sunderland)",
        period: "Jan 2021 - Mar 2024",
        description: "Studied IT and Computer Science, focusing on web development and software engineering.",
        kind: EntryKind::Education,
    },
    TimelineEntry {
        title: "MERN Stack Course",
        subtitle: "Broadway Institution",
        period: "Currently Running",
        description: "Comprehensive training in MongoDB, Express.js, React.js, and Node.js for full-stack development.",
        kind: EntryKind::Education,
    },
    TimelineEntry {
        title: "JavaScript Essentials 1",
        subtitle: "Cisco",
        period: "2023",
        description: "Certification in JavaScript fundamentals and programming concepts.",
        kind: EntryKind::Certificate,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Location",
        value: "Kathmandu, Nepal",
        icon: "extra-location",
        href: None,
    },
    ContactDetail {
        label: "Email",
        value: "Ishankarki7624@gmail.com",
        icon: "extra-email",
        href: Some("mailto:Ishankarki7624@gmail.com"),
    },
    ContactDetail {
        label: "Phone",
        value: "+977 9865455167",
        icon: "extra-phone",
        href: None,
    },
];

use crate::icons::Icon;

pub const BRAND: &str = "felv-developer";
pub const OWNER: &str = "Franklin loaiza";
pub const TAGLINE: &str =
    "desarrollador de software y me apasiona transformar ideas en proyectos reales que funcionan.";

pub const GITHUB_URL: &str = "https://github.com/FRANKLIN399";
pub const LINKEDIN_URL: &str =
    "https://www.linkedin.com/feed/?trk=guest_homepage-basic_google-one-tap-submit";
pub const EMAIL: &str = "franklinesteban2408@gmail.com";

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Tailwind gradient stops, used with `bg-gradient-to-br`.
    pub gradient: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Proyecto E-commerce",
        description: "Plataforma completa de comercio electrónico con carrito de compras y pasarela de pagos",
        tech: &["React", "Node.js", "MongoDB"],
        gradient: "from-red-500 to-orange-500",
    },
    Project {
        title: "Dashboard Analytics",
        description: "Dashboard interactivo con visualización de datos en tiempo real",
        tech: &["React", "D3.js", "Firebase"],
        gradient: "from-orange-500 to-yellow-500",
    },
    Project {
        title: "App Móvil Social",
        description: "Red social con chat en tiempo real y compartición de multimedia",
        tech: &["React Native", "WebSocket", "AWS"],
        gradient: "from-red-600 to-pink-500",
    },
];

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "React",
        icon: Icon::Code,
        description: "Desarrollo de aplicaciones web modernas",
    },
    Skill {
        name: "JavaScript",
        icon: Icon::Zap,
        description: "ES6+ y programación funcional",
    },
    Skill {
        name: "CSS/Tailwind",
        icon: Icon::Palette,
        description: "Diseño responsive y moderno",
    },
    Skill {
        name: "Node.js",
        icon: Icon::Code,
        description: "APIs RESTful y backend",
    },
    Skill {
        name: "Git",
        icon: Icon::Github,
        description: "Control de versiones y colaboración",
    },
    Skill {
        name: "UI/UX",
        icon: Icon::Palette,
        description: "Interfaces intuitivas y atractivas",
    },
];

//! Static site copy and link lists rendered on the home page.

use folio_core::orbit::OrbitSpec;

pub struct StudioCard {
    pub slug: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub logo: &'static str,
}

pub const STUDIO_CARDS: [StudioCard; 2] = [
    StudioCard {
        slug: "dsy",
        name: "DSY Studio",
        role: "Game Development Studio",
        logo: "/assets/img/dsy.svg",
    },
    StudioCard {
        slug: "xero",
        name: "Xero Theory",
        role: "Music & Sound Studio",
        logo: "/assets/img/xt.svg",
    },
];

pub struct SocialLink {
    pub platform: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    /// CSS modifier selecting the platform colour.
    pub tone: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 8] = [
    SocialLink {
        platform: "Instagram",
        title: "@_souhardyo",
        url: "https://instagram.com/_souhardyo",
        tone: "instagram",
    },
    SocialLink {
        platform: "DSY Studio Insta",
        title: "@dsystudio_",
        url: "https://instagram.com/dsystudio_",
        tone: "instagram",
    },
    SocialLink {
        platform: "YouTube",
        title: "DSY Studio",
        url: "https://www.youtube.com/@studiodsy",
        tone: "youtube",
    },
    SocialLink {
        platform: "YouTube",
        title: "Souhardyo Dey",
        url: "https://www.youtube.com/@SouhardyoDey",
        tone: "youtube",
    },
    SocialLink {
        platform: "Patreon",
        title: "Support My Work",
        url: "https://www.patreon.com/cw/DSYStudio",
        tone: "patreon",
    },
    SocialLink {
        platform: "Sketchfab",
        title: "My 3D Models",
        url: "https://sketchfab.com/studiodsy",
        tone: "sketchfab",
    },
    SocialLink {
        platform: "ArtStation",
        title: "Portfolio",
        url: "https://www.artstation.com/studiodsy",
        tone: "artstation",
    },
    SocialLink {
        platform: "GitHub",
        title: "Syd25",
        url: "https://github.com/Syd25-legend",
        tone: "github",
    },
];

pub const HERO_TAGLINE: &str = "Game Developer and VFX & CGI Artist";

pub const HERO_INTRO: &str = "I'm a Game Developer and VFX & CGI Artist with expertise in \
    creating stunning 3D environments and visual effects.";

pub const ABOUT: [&str; 2] = [
    "I'm a Game Developer and VFX & CGI Artist with expertise in creating stunning 3D \
     environments and visual effects. My work focuses on making worlds from my imagination \
     and creating games based on those worlds.",
    "I specialize in 3D modelling, animation, shading and environment creation. In addition \
     to these, I like to vibe code and use AI to create things which are complex and take a \
     lot of time.",
];

pub const SKILLS: [&str; 6] = [
    "3D Modelling",
    "Animation",
    "Shading",
    "Environment Design",
    "VFX & CGI",
    "Game Development",
];

/// One ring of the hero orbit widget and the glyph riding on it.
pub struct OrbitIcon {
    pub spec: OrbitSpec,
    pub glyph: &'static str,
    pub label: &'static str,
}

pub const ORBITS: [OrbitIcon; 3] = [
    OrbitIcon {
        spec: OrbitSpec {
            radius: 130.0,
            period_secs: 20.0,
            initial_angle: 0.0,
            reverse: false,
        },
        glyph: "✦",
        label: "VFX",
    },
    OrbitIcon {
        spec: OrbitSpec {
            radius: 190.0,
            period_secs: 35.0,
            initial_angle: 120.0,
            reverse: true,
        },
        glyph: "▤",
        label: "Layers",
    },
    OrbitIcon {
        spec: OrbitSpec {
            radius: 260.0,
            period_secs: 45.0,
            initial_angle: 240.0,
            reverse: false,
        },
        glyph: "</>",
        label: "Code",
    },
];

// Plain records for the compiled-in portfolio tables

use eframe::egui::Color32;
use egui_phosphor::regular as icons;

/// Closed set of glyphs the content tables may reference.
///
/// The tables never carry icon strings; each record names one of these
/// variants and rendering resolves it to a Phosphor codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Atom,
    BracketsCurly,
    FileJs,
    FileHtml,
    Wind,
    DeviceMobile,
    Lightning,
    Sparkle,
    Stack,
    TreeStructure,
    GitBranch,
    Rocket,
    Code,
    Gauge,
    MagnifyingGlass,
    Wrench,
    Envelope,
    Phone,
    MapPin,
    Globe,
    GithubLogo,
    LinkedinLogo,
    MastodonLogo,
    InstagramLogo,
}

impl Glyph {
    pub fn text(self) -> &'static str {
        match self {
            Glyph::Atom => icons::ATOM,
            Glyph::BracketsCurly => icons::BRACKETS_CURLY,
            Glyph::FileJs => icons::FILE_JS,
            Glyph::FileHtml => icons::FILE_HTML,
            Glyph::Wind => icons::WIND,
            Glyph::DeviceMobile => icons::DEVICE_MOBILE,
            Glyph::Lightning => icons::LIGHTNING,
            Glyph::Sparkle => icons::SPARKLE,
            Glyph::Stack => icons::STACK,
            Glyph::TreeStructure => icons::TREE_STRUCTURE,
            Glyph::GitBranch => icons::GIT_BRANCH,
            Glyph::Rocket => icons::ROCKET,
            Glyph::Code => icons::CODE,
            Glyph::Gauge => icons::GAUGE,
            Glyph::MagnifyingGlass => icons::MAGNIFYING_GLASS,
            Glyph::Wrench => icons::WRENCH,
            Glyph::Envelope => icons::ENVELOPE,
            Glyph::Phone => icons::PHONE,
            Glyph::MapPin => icons::MAP_PIN,
            Glyph::Globe => icons::GLOBE,
            Glyph::GithubLogo => icons::GITHUB_LOGO,
            Glyph::LinkedinLogo => icons::LINKEDIN_LOGO,
            Glyph::MastodonLogo => icons::MASTODON_LOGO,
            Glyph::InstagramLogo => icons::INSTAGRAM_LOGO,
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    /// Short brand mark for the navbar
    pub monogram: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub copyright: &'static str,
}

/// Named external link on a project slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Demo,
    Source,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Demo => "Live demo",
            LinkKind::Source => "Source",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            LinkKind::Demo => Glyph::Globe,
            LinkKind::Source => Glyph::GithubLogo,
        }
    }
}

pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// Path below the app image dir; a painted placeholder stands in when absent
    pub image: &'static str,
    pub accent: Color32,
    pub links: &'static [ProjectLink],
}

pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub accent: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Animation,
    StateManagement,
    Tools,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Animation => "Animation",
            SkillCategory::StateManagement => "State Management",
            SkillCategory::Tools => "Tools",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    pub glyph: Glyph,
    pub category: SkillCategory,
    pub accent: Color32,
}

pub struct Service {
    pub title: &'static str,
    pub blurb: &'static str,
    pub glyph: Glyph,
    pub accent: Color32,
}

pub struct Social {
    pub name: &'static str,
    pub url: &'static str,
    pub glyph: Glyph,
    pub accent: Color32,
}

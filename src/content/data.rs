// The portfolio itself. Edit here, not in the section renderers.

use eframe::egui::Color32;

use super::types::*;

pub static PROFILE: Profile = Profile {
    name: "Mara Voss",
    monogram: "mv.",
    role: "Front-End Developer",
    tagline: "I build fast, friendly interfaces with a spring in their step.",
    bio: "I am a front-end developer with three years of agency and freelance \
          work behind me, most of it spent turning rough product ideas into \
          polished single-page apps. I care about motion that explains rather \
          than decorates, interfaces that stay usable on a phone held in one \
          hand, and builds that ship in milliseconds.\n\nAway from the editor \
          I photograph harbors, collect mechanical keyboards, and volunteer at \
          a local code club teaching teenagers their first components.",
    email: "hello@maravoss.dev",
    phone: "+49 341 2299 417",
    location: "Leipzig, Germany",
    copyright: "© 2026 Mara Voss. All rights reserved.",
};

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Atlas Notes",
        summary: "Local-first knowledge base with backlinks, instant search and \
                  an offline sync queue. Notes live in IndexedDB and merge \
                  without conflicts when the connection returns.",
        tags: &["React", "TypeScript", "IndexedDB"],
        image: "projects/atlas-notes.png",
        accent: Color32::from_rgb(156, 122, 206),
        links: &[
            ProjectLink { kind: LinkKind::Demo, url: "https://atlas-notes.maravoss.dev" },
            ProjectLink { kind: LinkKind::Source, url: "https://github.com/maravoss/atlas-notes" },
        ],
    },
    Project {
        title: "Tidewatch",
        summary: "Dashboard for small-harbor sailors: tide curves, wind and \
                  moonrise on one glanceable screen, rendered as animated SVG \
                  charts that stay legible in direct sunlight.",
        tags: &["React", "D3", "Vite"],
        image: "projects/tidewatch.png",
        accent: Color32::from_rgb(59, 130, 246),
        links: &[
            ProjectLink { kind: LinkKind::Demo, url: "https://tidewatch.maravoss.dev" },
            ProjectLink { kind: LinkKind::Source, url: "https://github.com/maravoss/tidewatch" },
        ],
    },
    Project {
        title: "Pocket Ledger",
        summary: "Installable budget tracker that works fully offline. Receipts \
                  are captured with the camera, categorized on-device and \
                  summarized in a monthly breakdown view.",
        tags: &["React", "Redux Toolkit", "PWA"],
        image: "projects/pocket-ledger.png",
        accent: Color32::from_rgb(236, 72, 153),
        links: &[
            ProjectLink { kind: LinkKind::Demo, url: "https://pocket-ledger.maravoss.dev" },
            ProjectLink { kind: LinkKind::Source, url: "https://github.com/maravoss/pocket-ledger" },
        ],
    },
    Project {
        title: "Mosaic Store",
        summary: "Storefront demo for a ceramics studio: filterable catalogue, \
                  cart held in context state and a checkout flow wired to a \
                  payments sandbox.",
        tags: &["Next.js", "Tailwind CSS", "Stripe"],
        image: "projects/mosaic-store.png",
        accent: Color32::from_rgb(139, 92, 246),
        links: &[
            ProjectLink { kind: LinkKind::Demo, url: "https://mosaic-store.maravoss.dev" },
            ProjectLink { kind: LinkKind::Source, url: "https://github.com/maravoss/mosaic-store" },
        ],
    },
    Project {
        title: "Ladder Solver",
        summary: "Word-ladder puzzle solver that searches a 170k-word graph in \
                  a web worker and replays the shortest path letter by letter, \
                  with the frontier visualized while it runs.",
        tags: &["TypeScript", "Web Workers", "BFS"],
        image: "projects/ladder-solver.png",
        accent: Color32::from_rgb(34, 197, 94),
        links: &[
            ProjectLink { kind: LinkKind::Demo, url: "https://ladder.maravoss.dev" },
            ProjectLink { kind: LinkKind::Source, url: "https://github.com/maravoss/ladder-solver" },
        ],
    },
];

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Meta Front-End Developer",
        issuer: "Coursera",
        date: "March 2024",
        image: "certificates/meta-frontend.png",
        accent: Color32::from_rgb(37, 99, 235),
    },
    Certificate {
        title: "Advanced CSS and Sass",
        issuer: "Udemy",
        date: "July 2024",
        image: "certificates/advanced-css.png",
        accent: Color32::from_rgb(164, 53, 240),
    },
    Certificate {
        title: "JavaScript Algorithms and Data Structures",
        issuer: "freeCodeCamp",
        date: "January 2024",
        image: "certificates/js-algorithms.png",
        accent: Color32::from_rgb(99, 102, 241),
    },
    Certificate {
        title: "Responsive Web Design",
        issuer: "freeCodeCamp",
        date: "November 2023",
        image: "certificates/responsive-design.png",
        accent: Color32::from_rgb(20, 184, 166),
    },
    Certificate {
        title: "Figma UI Essentials",
        issuer: "LinkedIn Learning",
        date: "September 2024",
        image: "certificates/figma-ui.png",
        accent: Color32::from_rgb(10, 102, 194),
    },
    Certificate {
        title: "Web Accessibility",
        issuer: "Udacity",
        date: "February 2025",
        image: "certificates/web-accessibility.png",
        accent: Color32::from_rgb(245, 158, 11),
    },
];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        glyph: Glyph::Atom,
        category: SkillCategory::Frontend,
        accent: Color32::from_rgb(97, 218, 251),
    },
    Skill {
        name: "TypeScript",
        glyph: Glyph::BracketsCurly,
        category: SkillCategory::Frontend,
        accent: Color32::from_rgb(49, 120, 198),
    },
    Skill {
        name: "JavaScript",
        glyph: Glyph::FileJs,
        category: SkillCategory::Frontend,
        accent: Color32::from_rgb(247, 223, 30),
    },
    Skill {
        name: "HTML & CSS",
        glyph: Glyph::FileHtml,
        category: SkillCategory::Frontend,
        accent: Color32::from_rgb(227, 79, 38),
    },
    Skill {
        name: "Tailwind CSS",
        glyph: Glyph::Wind,
        category: SkillCategory::Frontend,
        accent: Color32::from_rgb(56, 189, 248),
    },
    Skill {
        name: "Responsive Design",
        glyph: Glyph::DeviceMobile,
        category: SkillCategory::Frontend,
        accent: Color32::from_rgb(16, 185, 129),
    },
    Skill {
        name: "Motion & Easing",
        glyph: Glyph::Lightning,
        category: SkillCategory::Animation,
        accent: Color32::from_rgb(132, 204, 22),
    },
    Skill {
        name: "Scroll Choreography",
        glyph: Glyph::Sparkle,
        category: SkillCategory::Animation,
        accent: Color32::from_rgb(244, 114, 182),
    },
    Skill {
        name: "Redux Toolkit",
        glyph: Glyph::Stack,
        category: SkillCategory::StateManagement,
        accent: Color32::from_rgb(118, 74, 188),
    },
    Skill {
        name: "Context & Hooks",
        glyph: Glyph::TreeStructure,
        category: SkillCategory::StateManagement,
        accent: Color32::from_rgb(245, 158, 11),
    },
    Skill {
        name: "Git & GitHub",
        glyph: Glyph::GitBranch,
        category: SkillCategory::Tools,
        accent: Color32::from_rgb(240, 80, 50),
    },
    Skill {
        name: "Vite",
        glyph: Glyph::Rocket,
        category: SkillCategory::Tools,
        accent: Color32::from_rgb(100, 108, 255),
    },
];

pub static SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        blurb: "Component-first single-page apps with clean state boundaries \
                and routes that load instantly.",
        glyph: Glyph::Code,
        accent: Color32::from_rgb(59, 130, 246),
    },
    Service {
        title: "Responsive Design",
        blurb: "Layouts that hold up from a 320px phone to an ultrawide, \
                tested on real devices rather than breakpoints alone.",
        glyph: Glyph::DeviceMobile,
        accent: Color32::from_rgb(16, 185, 129),
    },
    Service {
        title: "UI Animation",
        blurb: "Purposeful motion: entrances, scroll reveals and micro- \
                interactions tuned to feel quick, never busy.",
        glyph: Glyph::Sparkle,
        accent: Color32::from_rgb(244, 114, 182),
    },
    Service {
        title: "Performance Tuning",
        blurb: "Bundle diets, image pipelines and render profiling until \
                Lighthouse stops complaining.",
        glyph: Glyph::Gauge,
        accent: Color32::from_rgb(245, 158, 11),
    },
    Service {
        title: "SEO Foundations",
        blurb: "Semantic markup, structured data and social cards so the work \
                is findable and shareable.",
        glyph: Glyph::MagnifyingGlass,
        accent: Color32::from_rgb(139, 92, 246),
    },
    Service {
        title: "Care & Maintenance",
        blurb: "Dependency upgrades, accessibility audits and small fixes on a \
                monthly cadence after launch.",
        glyph: Glyph::Wrench,
        accent: Color32::from_rgb(100, 116, 139),
    },
];

pub static SOCIALS: &[Social] = &[
    Social {
        name: "GitHub",
        url: "https://github.com/maravoss",
        glyph: Glyph::GithubLogo,
        accent: Color32::from_rgb(124, 139, 159),
    },
    Social {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/maravoss",
        glyph: Glyph::LinkedinLogo,
        accent: Color32::from_rgb(10, 102, 194),
    },
    Social {
        name: "Mastodon",
        url: "https://hachyderm.io/@maravoss",
        glyph: Glyph::MastodonLogo,
        accent: Color32::from_rgb(99, 100, 255),
    },
    Social {
        name: "Instagram",
        url: "https://www.instagram.com/maravoss.dev",
        glyph: Glyph::InstagramLogo,
        accent: Color32::from_rgb(228, 64, 95),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_non_empty() {
        crate::content::assert_valid();
    }

    #[test]
    fn test_project_links_have_urls() {
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.image.is_empty());
            for link in project.links {
                assert!(link.url.starts_with("https://"), "{}", project.title);
            }
        }
    }

    #[test]
    fn test_certificates_have_issuer_and_date() {
        for cert in CERTIFICATES {
            assert!(!cert.issuer.is_empty(), "{}", cert.title);
            assert!(!cert.date.is_empty(), "{}", cert.title);
        }
    }

    #[test]
    fn test_every_skill_category_is_populated() {
        for category in [
            SkillCategory::Frontend,
            SkillCategory::Animation,
            SkillCategory::StateManagement,
            SkillCategory::Tools,
        ] {
            assert!(
                SKILLS.iter().any(|s| s.category == category),
                "no skills in {:?}",
                category
            );
        }
    }
}

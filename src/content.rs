mod data;
mod types;

pub use data::{CERTIFICATES, PROFILE, PROJECTS, SERVICES, SKILLS, SOCIALS};
pub use types::{
    Certificate, Glyph, LinkKind, Profile, Project, ProjectLink, Service, Skill, SkillCategory,
    Social,
};

/// Caller contract: every collection rendered by the page is non-empty.
/// Violations are programmer errors, caught at startup rather than tolerated.
pub fn assert_valid() {
    assert!(!PROJECTS.is_empty(), "projects table must not be empty");
    assert!(!CERTIFICATES.is_empty(), "certificates table must not be empty");
    assert!(!SKILLS.is_empty(), "skills table must not be empty");
    assert!(!SERVICES.is_empty(), "services table must not be empty");
    assert!(!SOCIALS.is_empty(), "socials table must not be empty");
}

pub mod components;
pub mod motion;
pub mod responsive;
pub mod theme;

/// Page sections, in scroll order. Navbar entries and section anchors both
/// iterate this.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Services,
    Projects,
    Certificates,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Services,
        SectionId::Projects,
        SectionId::Certificates,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Services => "Services",
            SectionId::Projects => "Projects",
            SectionId::Certificates => "Certificates",
            SectionId::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_index_round_trips() {
        for (i, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}

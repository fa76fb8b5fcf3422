use std::fmt;

/// Anchor sections of the page, declared in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
}

pub const SECTIONS: [SectionId; 7] = [
    SectionId::Hero,
    SectionId::About,
    SectionId::Skills,
    SectionId::Experience,
    SectionId::Education,
    SectionId::Projects,
    SectionId::Contact,
];

impl SectionId {
    /// Stable element id used as the DOM anchor.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Text shown in the navigation bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Position in the document, starting at 0.
    pub const fn order(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_in_document_order() {
        for (i, id) in SECTIONS.iter().enumerate() {
            assert_eq!(id.order(), i);
        }
        assert_eq!(SECTIONS.first(), Some(&SectionId::Hero));
        assert_eq!(SECTIONS.last(), Some(&SectionId::Contact));
    }

    #[test]
    fn test_ids_are_unique_and_lowercase_labels() {
        for id in SECTIONS {
            assert_eq!(id.as_str(), id.label().to_lowercase());
            assert_eq!(SECTIONS.iter().filter(|other| **other == id).count(), 1);
        }
    }

    #[test]
    fn test_default_is_hero() {
        assert_eq!(SectionId::default(), SectionId::Hero);
    }
}

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The fixed set of page regions. Declaration order is page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("no such section: {0}")]
    Unknown(String),
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Sections linked from the navigation bar, in display order.
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// The element id of the region, also used as the in-page anchor.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == id)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_back() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
            assert_eq!(section.anchor().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn test_nav_labels_lowercase_to_ids() {
        for section in SectionId::NAV {
            assert_eq!(section.label().to_lowercase(), section.as_str());
        }
        assert!(!SectionId::NAV.contains(&SectionId::Hero));
    }

    #[test]
    fn test_unknown_section() {
        let err = "blog".parse::<SectionId>().unwrap_err();
        assert_eq!(err, SectionError::Unknown("blog".to_string()));
        assert_eq!(err.to_string(), "no such section: blog");
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_default_is_hero() {
        assert_eq!(SectionId::default(), SectionId::Hero);
        assert_eq!(SectionId::ALL[0], SectionId::Hero);
    }
}

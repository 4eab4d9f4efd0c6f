//! Navigation sections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// The active navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Tackle,
    Techniques,
    Waters,
}

impl Section {
    /// Sections in navigation order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Tackle,
        Section::Techniques,
        Section::Waters,
    ];

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Tackle => "Снасти",
            Section::Techniques => "Техники",
            Section::Waters => "Водоемы",
        }
    }

    /// ASCII slug used in scripts, config and `data-target` attributes.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Tackle => "tackle",
            Section::Techniques => "techniques",
            Section::Waters => "waters",
        }
    }

    /// Techniques shows the tutorials block; every other section shows the
    /// home content.
    pub fn shows_tutorials(&self) -> bool {
        matches!(self, Section::Techniques)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == needle || section.label().to_lowercase() == needle)
            .ok_or_else(|| StorefrontError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_label_or_slug() {
        assert_eq!("Техники".parse::<Section>(), Ok(Section::Techniques));
        assert_eq!("waters".parse::<Section>(), Ok(Section::Waters));
        assert_eq!(" ГЛАВНАЯ ".parse::<Section>(), Ok(Section::Home));
        assert_eq!(
            "shop".parse::<Section>(),
            Err(StorefrontError::UnknownSection("shop".to_string()))
        );
    }

    #[test]
    fn test_only_techniques_shows_tutorials() {
        let tutorial_sections: Vec<_> = Section::ALL
            .into_iter()
            .filter(Section::shows_tutorials)
            .collect();
        assert_eq!(tutorial_sections, vec![Section::Techniques]);
    }
}

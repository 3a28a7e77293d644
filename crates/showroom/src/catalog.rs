//! Per-section page content.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SECTION_COUNT;
use crate::error::ConfigError;

/// Text and colour for one scroll section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    /// Large heading, split into words for the reveal animation.
    pub heading: String,
    /// Entry in the left navigation column (make).
    pub left_label: String,
    /// Entry in the right navigation column (model year / class).
    pub right_label: String,
    /// Background tint, sRGB.
    pub accent: [u8; 3],
}

impl SectionContent {
    fn new(heading: &str, left: &str, right: &str, accent: [u8; 3]) -> Self {
        Self {
            heading: heading.to_string(),
            left_label: left.to_string(),
            right_label: right.to_string(),
            accent,
        }
    }
}

/// Exactly [`SECTION_COUNT`] sections, in page order.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCatalog {
    sections: Vec<SectionContent>,
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionContent::new("Mustang Fastback", "Ford", "1967", [176, 58, 46]),
                SectionContent::new("Corvette Stingray", "Chevrolet", "1963", [40, 84, 138]),
                SectionContent::new("Porsche 911 Carrera", "Porsche", "1973", [196, 148, 62]),
                SectionContent::new("Jaguar E-Type", "Jaguar", "1961", [46, 94, 70]),
                SectionContent::new("Ferrari Testarossa", "Ferrari", "1984", [160, 28, 36]),
                SectionContent::new("Lamborghini Countach", "Lamborghini", "1974", [214, 170, 38]),
                SectionContent::new("Aston Martin DB5", "Aston Martin", "1963", [112, 120, 128]),
                SectionContent::new("Mercedes 300SL Gullwing", "Mercedes-Benz", "1954", [188, 190, 194]),
                SectionContent::new("BMW M1", "BMW", "1978", [30, 60, 120]),
                SectionContent::new("Shelby Cobra 427", "Shelby", "1965", [24, 42, 88]),
            ],
        }
    }
}

impl SectionCatalog {
    pub fn new(sections: Vec<SectionContent>) -> Result<Self, ConfigError> {
        if sections.len() != SECTION_COUNT {
            return Err(ConfigError::section_count(sections.len()));
        }
        Ok(Self { sections })
    }

    /// Parse a JSON array of sections.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let sections: Vec<SectionContent> = serde_json::from_str(json)?;
        Self::new(sections)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn get(&self, section: usize) -> Option<&SectionContent> {
        self.sections.get(section)
    }

    pub fn sections(&self) -> &[SectionContent] {
        &self.sections
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.heading.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConfigError: failures while loading settings or the section catalog
// ---------------------------------------------------------------------------

use std::fmt;

use crate::config::SECTION_COUNT;

/// Errors that can occur while loading the page configuration files.
///
/// Callers usually log these and fall back to the built-in defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),
    /// The file is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// The catalog does not describe exactly one entry per section.
    SectionCount { expected: usize, found: usize },
}

impl ConfigError {
    pub fn section_count(found: usize) -> Self {
        ConfigError::SectionCount {
            expected: SECTION_COUNT,
            found,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::SectionCount { expected, found } => write!(
                f,
                "Section count mismatch: expected {expected} sections, found {found}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::SectionCount { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

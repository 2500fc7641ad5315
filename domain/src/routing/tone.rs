//! Requested output tone

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output style the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// No preference; never adds a bonus (default)
    #[default]
    Balanced,
    Creative,
    Deterministic,
}

const CREATIVE_TAGS: &[&str] = &["creative", "storytelling", "ideation"];
const DETERMINISTIC_TAGS: &[&str] = &["deterministic", "structured-json", "tool-calling"];

impl Tone {
    /// Permissive parse for untrusted input; anything but an exact lowercase
    /// tone name becomes `Balanced`.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Strength tags that count as a match for this tone
    pub fn matching_tags(&self) -> &'static [&'static str] {
        match self {
            Tone::Balanced => &[],
            Tone::Creative => CREATIVE_TAGS,
            Tone::Deterministic => DETERMINISTIC_TAGS,
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, Tone::Balanced)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Balanced => "balanced",
            Tone::Creative => "creative",
            Tone::Deterministic => "deterministic",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(Tone::Balanced),
            "creative" => Ok(Tone::Creative),
            "deterministic" => Ok(Tone::Deterministic),
            _ => Err(format!("Invalid tone: {}", s)),
        }
    }
}

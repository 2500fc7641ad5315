//! Routing priority

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the caller cares about most when picking a model.
///
/// The selected axis dominates the composite score; the other two
/// still contribute with a lower weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Prefer low latency
    Speed,
    /// Prefer low relative cost
    Cost,
    /// Prefer high quality rating (default)
    #[default]
    Quality,
}

impl Priority {
    /// Permissive parse for untrusted input: anything that is not exactly
    /// `speed`, `cost` or `quality` (including a missing value) becomes the default.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Speed => "speed",
            Priority::Cost => "cost",
            Priority::Quality => "quality",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speed" => Ok(Priority::Speed),
            "cost" => Ok(Priority::Cost),
            "quality" => Ok(Priority::Quality),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

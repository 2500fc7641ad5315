//! Per-axis sub-scores
//!
//! Each function maps one descriptor attribute onto `[0, 1]`, higher is
//! better. They are independent so each law can be checked on its own.

use crate::catalog::QUALITY_MAX;
use crate::routing::{Priority, Tone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A component of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Speed,
    Cost,
    Quality,
    Tone,
}

impl Axis {
    /// Fixed order used to break ties between equal contributions
    pub const ALL: [Axis; 4] = [Axis::Speed, Axis::Cost, Axis::Quality, Axis::Tone];

    /// The axis a priority selects as dominant
    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::Speed => Axis::Speed,
            Priority::Cost => Axis::Cost,
            Priority::Quality => Axis::Quality,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Speed => "speed",
            Axis::Cost => "cost",
            Axis::Quality => "quality",
            Axis::Tone => "tone",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `1 / (1 + latency / scale)`: 0.5 at `scale` ms, falling toward 0 as latency grows.
pub fn speed_score(latency_ms: u32, latency_scale_ms: f64) -> f64 {
    1.0 / (1.0 + f64::from(latency_ms) / latency_scale_ms)
}

/// `1 / (1 + cost / scale)`: 0.5 at `scale`, falling toward 0 as cost grows.
pub fn cost_score(cost: f64, cost_scale: f64) -> f64 {
    1.0 / (1.0 + cost / cost_scale)
}

/// Quality rating mapped linearly onto `[0, 1]`.
pub fn quality_score(quality: f64) -> f64 {
    (quality / QUALITY_MAX).clamp(0.0, 1.0)
}

/// 1.0 when any of `strengths` matches `tone`, otherwise 0.0. Balanced never matches.
pub fn tone_score(strengths: &[String], tone: Tone) -> f64 {
    let tags = tone.matching_tags();
    let matched = strengths
        .iter()
        .any(|strength| tags.iter().any(|tag| strength.eq_ignore_ascii_case(tag)));
    if matched { 1.0 } else { 0.0 }
}

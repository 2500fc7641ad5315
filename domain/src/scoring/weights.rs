//! Scoring weights
//!
//! [`ScoringWeights`] holds the tunable constants of the composite score.
//! The defaults satisfy the ordering laws the engine is tested against:
//! the selected priority dominates, the other axes still count, and a tone
//! match breaks near-ties.

use crate::routing::Priority;
use crate::scoring::axis::Axis;
use serde::{Deserialize, Serialize};

/// Weights and curve scales for the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of the axis named by the request priority
    pub dominant_weight: f64,
    /// Weight of each of the two other axes
    pub secondary_weight: f64,
    /// Added when a strength tag matches the requested tone
    pub tone_bonus: f64,
    /// Latency (ms) at which the speed sub-score is 0.5
    pub latency_scale_ms: f64,
    /// Relative cost at which the cost sub-score is 0.5
    pub cost_scale: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            dominant_weight: 0.70,
            secondary_weight: 0.15,
            tone_bonus: 0.08,
            latency_scale_ms: 1_000.0,
            cost_scale: 1.0,
        }
    }
}

impl ScoringWeights {
    /// Weight applied to `axis` under `priority`
    pub fn weight_for(&self, axis: Axis, priority: Priority) -> f64 {
        match axis {
            Axis::Tone => self.tone_bonus,
            axis if axis == Axis::for_priority(priority) => self.dominant_weight,
            _ => self.secondary_weight,
        }
    }

    // ==================== Validation ====================

    /// Validate these weights, returning a list of issues.
    ///
    /// Rules:
    /// - `dominant_weight > secondary_weight`
    /// - `secondary_weight >= 0` and `tone_bonus >= 0`
    /// - both scales are positive
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let finite = [
            ("dominant_weight", self.dominant_weight),
            ("secondary_weight", self.secondary_weight),
            ("tone_bonus", self.tone_bonus),
            ("latency_scale_ms", self.latency_scale_ms),
            ("cost_scale", self.cost_scale),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                issues.push(format!("{} must be a finite number", name));
            }
        }
        if !issues.is_empty() {
            return issues;
        }

        if self.dominant_weight <= self.secondary_weight {
            issues.push(format!(
                "dominant_weight ({}) must be greater than secondary_weight ({})",
                self.dominant_weight, self.secondary_weight
            ));
        }
        if self.secondary_weight < 0.0 {
            issues.push("secondary_weight cannot be negative".to_string());
        }
        if self.tone_bonus < 0.0 {
            issues.push("tone_bonus cannot be negative".to_string());
        }
        if self.latency_scale_ms <= 0.0 {
            issues.push("latency_scale_ms must be positive".to_string());
        }
        if self.cost_scale <= 0.0 {
            issues.push("cost_scale must be positive".to_string());
        }
        issues
    }
}

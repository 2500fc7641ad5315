//! Scoring engine.
//!
//! Independent pure sub-score functions in [`axis`], their weights in
//! [`weights`], and the [`ScoringEngine`] that combines them.

pub mod axis;
pub mod engine;
pub mod weights;

pub use axis::{Axis, cost_score, quality_score, speed_score, tone_score};
pub use engine::{
    Evaluation, NOTABLE_SUB_SCORE, ScoreBreakdown, ScoredCandidate, ScoringEngine,
};
pub use weights::ScoringWeights;

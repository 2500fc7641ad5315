//! Scoring engine
//!
//! Turns a [`RoutingContext`] and a [`Catalog`] into scored candidates.
//!
//! ```text
//! model ──▶ modality gate ──▶ sub-scores ──▶ weighted sum ──▶ ScoredCandidate
//!            (drop if no        speed/cost/     (priority        score + notes
//!             overlap)          quality/tone     dominates)
//! ```

use crate::catalog::{Catalog, ModelDescriptor};
use crate::insight::FamilyNotes;
use crate::ranking::RankingResult;
use crate::routing::RoutingContext;
use crate::scoring::axis::{Axis, cost_score, quality_score, speed_score, tone_score};
use crate::scoring::weights::ScoringWeights;
use serde::Serialize;

/// Secondary axes are only mentioned in the notes at or above this sub-score
pub const NOTABLE_SUB_SCORE: f64 = 0.6;

/// Raw `[0, 1]` sub-scores of one candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub speed: f64,
    pub cost: f64,
    pub quality: f64,
    pub tone: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Speed => self.speed,
            Axis::Cost => self.cost,
            Axis::Quality => self.quality,
            Axis::Tone => self.tone,
        }
    }
}

/// A catalog model scored against one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate<'a> {
    pub model: &'a ModelDescriptor,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Rationale, most important first. Never empty.
    pub notes: Vec<String>,
}

impl ScoredCandidate<'_> {
    /// The primary reason this candidate scored the way it did
    pub fn primary_note(&self) -> Option<&str> {
        self.notes.first().map(String::as_str)
    }
}

/// Output of a full evaluation: ranked candidates plus per-family commentary
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'a> {
    pub ranked: RankingResult<'a>,
    pub family_notes: FamilyNotes,
}

/// Scores models with a fixed set of weights.
///
/// Stateless apart from the weights, so one engine can serve any number
/// of requests concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score a single model, or `None` if it supports none of the requested modalities
    pub fn score<'a>(
        &self,
        model: &'a ModelDescriptor,
        context: &RoutingContext,
    ) -> Option<ScoredCandidate<'a>> {
        if !model.modalities.intersects(&context.modalities) {
            return None;
        }

        let breakdown = ScoreBreakdown {
            speed: speed_score(model.latency, self.weights.latency_scale_ms),
            cost: cost_score(model.cost, self.weights.cost_scale),
            quality: quality_score(model.quality),
            tone: tone_score(&model.strengths, context.tone),
        };

        let mut contributions: Vec<(Axis, f64)> = Axis::ALL
            .iter()
            .map(|&axis| {
                let weight = self.weights.weight_for(axis, context.priority);
                (axis, weight * breakdown.get(axis))
            })
            .collect();
        let score = contributions.iter().map(|(_, weighted)| weighted).sum();

        // Stable sort keeps Axis::ALL order for equal contributions.
        contributions.sort_by(|a, b| b.1.total_cmp(&a.1));

        let notes = build_notes(model, context, &breakdown, &contributions);

        Some(ScoredCandidate {
            model,
            score,
            breakdown,
            notes,
        })
    }

    /// Score every eligible catalog model, in catalog order
    pub fn score_all<'a>(
        &self,
        catalog: &'a Catalog,
        context: &RoutingContext,
    ) -> Vec<ScoredCandidate<'a>> {
        catalog
            .list_models()
            .iter()
            .filter_map(|model| self.score(model, context))
            .collect()
    }

    /// Score, rank, and summarize families for one request
    pub fn evaluate<'a>(&self, catalog: &'a Catalog, context: &RoutingContext) -> Evaluation<'a> {
        let ranked = RankingResult::from_candidates(self.score_all(catalog, context));
        let family_notes = FamilyNotes::from_ranking(&ranked);
        Evaluation {
            ranked,
            family_notes,
        }
    }
}

fn build_notes(
    model: &ModelDescriptor,
    context: &RoutingContext,
    breakdown: &ScoreBreakdown,
    contributions: &[(Axis, f64)],
) -> Vec<String> {
    let tone_tag = model.matching_strength(context.tone.matching_tags());
    let mut notes = Vec::new();

    // A tone contribution can only lead when a tag actually matched.
    let primary = contributions
        .iter()
        .map(|(axis, _)| *axis)
        .find(|axis| *axis != Axis::Tone || tone_tag.is_some())
        .unwrap_or(Axis::Quality);

    notes.push(match primary {
        Axis::Speed => format!("Ranked on speed: {}ms median latency", model.latency),
        Axis::Cost => format!("Ranked on cost: {:.2} relative cost", model.cost),
        Axis::Quality => format!("Ranked on quality: {:.0}/100 quality rating", model.quality),
        Axis::Tone => format!(
            "Ranked on {} tone: strengths include {}",
            context.tone,
            tone_tag.unwrap_or_default()
        ),
    });

    for (axis, _) in contributions.iter().filter(|(axis, _)| *axis != primary) {
        let note = match axis {
            Axis::Tone => tone_tag.map(|tag| format!("Fits {} tone via {}", context.tone, tag)),
            axis if breakdown.get(*axis) < NOTABLE_SUB_SCORE => None,
            Axis::Speed => Some(format!("Responsive at {}ms median", model.latency)),
            Axis::Cost => Some(format!("Economical at {:.2} relative cost", model.cost)),
            Axis::Quality => Some(format!("Strong {:.0}/100 quality rating", model.quality)),
        };
        notes.extend(note);
    }

    if !model.strengths.is_empty() {
        notes.push(format!("Strengths: {}", model.strengths.join(", ")));
    }

    notes
}

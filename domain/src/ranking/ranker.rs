//! Ranker
//!
//! Orders scored candidates and picks the winner plus alternates.

use crate::core::error::DomainError;
use crate::scoring::ScoredCandidate;

/// Number of fallbacks offered next to the winner
pub const MAX_ALTERNATES: usize = 2;

/// Reason shown for the winner when it carries no notes
pub const DEFAULT_BEST_REASON: &str = "Highest composite score across catalog.";

/// Reason shown for an alternate when it carries no notes
pub const DEFAULT_ALTERNATE_REASON: &str = "Ready fallback if primary is unavailable.";

/// Candidates sorted by descending score, ties by ascending model id.
///
/// The order is a total order over the candidates, so evaluating the same
/// request twice always yields the same sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankingResult<'a> {
    candidates: Vec<ScoredCandidate<'a>>,
}

impl<'a> RankingResult<'a> {
    pub fn from_candidates(mut candidates: Vec<ScoredCandidate<'a>>) -> Self {
        candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.model.id.cmp(&b.model.id))
        });
        Self { candidates }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredCandidate<'a>> {
        self.candidates.iter()
    }

    pub fn as_slice(&self) -> &[ScoredCandidate<'a>] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn top(&self) -> Option<&ScoredCandidate<'a>> {
        self.candidates.first()
    }

    /// Split into winner and up to [`MAX_ALTERNATES`] fallbacks.
    ///
    /// Fails with [`DomainError::NoEligibleModels`] when nothing was ranked.
    pub fn into_selection(self) -> Result<Selection<'a>, DomainError> {
        let mut iter = self.candidates.into_iter();
        let top = iter.next().ok_or(DomainError::NoEligibleModels)?;
        let alternates = iter.take(MAX_ALTERNATES).collect();
        Ok(Selection { top, alternates })
    }
}

impl<'r, 'a> IntoIterator for &'r RankingResult<'a> {
    type Item = &'r ScoredCandidate<'a>;
    type IntoIter = std::slice::Iter<'r, ScoredCandidate<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Winner plus fallbacks for one request
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub top: ScoredCandidate<'a>,
    pub alternates: Vec<ScoredCandidate<'a>>,
}

impl Selection<'_> {
    /// Why the winner was picked
    pub fn top_reason(&self) -> &str {
        self.top.primary_note().unwrap_or(DEFAULT_BEST_REASON)
    }

    /// Why a fallback is worth keeping, taken from its own primary note
    pub fn alternate_reason<'c>(candidate: &'c ScoredCandidate<'_>) -> &'c str {
        candidate.primary_note().unwrap_or(DEFAULT_ALTERNATE_REASON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Modality, ModalitySet, ModelDescriptor};
    use crate::scoring::ScoreBreakdown;

    fn descriptor(id: &str) -> ModelDescriptor {
        ModelDescriptor::new(id, "Acme", "general", ModalitySet::single(Modality::Text))
    }

    fn candidate<'a>(model: &'a ModelDescriptor, score: f64) -> ScoredCandidate<'a> {
        ScoredCandidate {
            model,
            score,
            breakdown: ScoreBreakdown {
                speed: 0.0,
                cost: 0.0,
                quality: 0.0,
                tone: 0.0,
            },
            notes: vec![format!("note for {}", model.id)],
        }
    }

    #[test]
    fn test_sorted_descending_by_score() {
        let (a, b, c) = (descriptor("a"), descriptor("b"), descriptor("c"));
        let ranking = RankingResult::from_candidates(vec![
            candidate(&a, 0.2),
            candidate(&b, 0.9),
            candidate(&c, 0.5),
        ]);
        let ids: Vec<_> = ranking.iter().map(|c| c.model.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        for pair in ranking.as_slice().windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_broken_by_id() {
        let (x, m, a) = (descriptor("x"), descriptor("m"), descriptor("a"));
        let forward = RankingResult::from_candidates(vec![
            candidate(&x, 0.5),
            candidate(&m, 0.5),
            candidate(&a, 0.5),
        ]);
        let backward = RankingResult::from_candidates(vec![
            candidate(&a, 0.5),
            candidate(&m, 0.5),
            candidate(&x, 0.5),
        ]);
        let ids: Vec<_> = forward.iter().map(|c| c.model.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m", "x"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_ranking_has_no_selection() {
        let ranking = RankingResult::from_candidates(vec![]);
        assert!(ranking.top().is_none());
        assert_eq!(ranking.into_selection(), Err(DomainError::NoEligibleModels));
    }

    #[test]
    fn test_selection_takes_two_alternates() {
        let models: Vec<_> = ["a", "b", "c", "d"].iter().map(|id| descriptor(id)).collect();
        let ranking = RankingResult::from_candidates(
            models
                .iter()
                .enumerate()
                .map(|(i, m)| candidate(m, 1.0 - i as f64 * 0.1))
                .collect(),
        );
        let selection = ranking.into_selection().unwrap();
        assert_eq!(selection.top.model.id, "a");
        let alternates: Vec<_> = selection.alternates.iter().map(|c| c.model.id.as_str()).collect();
        assert_eq!(alternates, vec!["b", "c"]);
        assert_eq!(selection.top_reason(), "note for a");
    }

    #[test]
    fn test_single_candidate_has_no_alternates() {
        let only = descriptor("only");
        let selection = RankingResult::from_candidates(vec![candidate(&only, 0.3)])
            .into_selection()
            .unwrap();
        assert!(selection.alternates.is_empty());
    }

    #[test]
    fn test_reason_fallbacks() {
        let m = descriptor("m");
        let mut bare = candidate(&m, 0.1);
        bare.notes.clear();
        assert_eq!(Selection::alternate_reason(&bare), DEFAULT_ALTERNATE_REASON);

        let selection = Selection {
            top: bare,
            alternates: vec![],
        };
        assert_eq!(selection.top_reason(), DEFAULT_BEST_REASON);
    }
}

//! Token estimator
//!
//! A cost proxy derived from the prompt length and the requested modality
//! mix. It ignores priority and tone on purpose: only input size matters.

use crate::catalog::{Catalog, ModalitySet};
use crate::core::prompt::Prompt;
use serde::{Deserialize, Serialize};

/// Estimated tokens per prompt character
pub const TOKENS_PER_CHAR: f64 = 0.6;

/// Fixed tokens per unit of modality weight
pub const TOKENS_PER_MODALITY_WEIGHT: f64 = 120.0;

/// Estimated consumption for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEstimate {
    pub estimated: u64,
}

/// `round(chars × 0.6 + Σ weight(m) × 120)` over the requested modalities.
///
/// # Example
///
/// ```
/// use paikeys_domain::{Catalog, Modality, ModalitySet, Prompt, estimate_tokens};
///
/// let prompt = Prompt::try_new("0123456789").unwrap();
/// let estimate = estimate_tokens(&prompt, &ModalitySet::single(Modality::Text), &Catalog::empty());
/// assert_eq!(estimate.estimated, 126);
/// ```
pub fn estimate_tokens(prompt: &Prompt, modalities: &ModalitySet, catalog: &Catalog) -> TokenEstimate {
    let length_term = prompt.char_len() as f64 * TOKENS_PER_CHAR;
    let modality_term: f64 = modalities
        .iter()
        .map(|m| catalog.modality_weight(m) * TOKENS_PER_MODALITY_WEIGHT)
        .sum();
    TokenEstimate {
        estimated: (length_term + modality_term).round().max(0.0) as u64,
    }
}

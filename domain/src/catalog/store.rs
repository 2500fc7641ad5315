//! Catalog store
//!
//! [`Catalog`] owns the model descriptors and the modality weight table.
//! It is validated once at construction and exposes read-only views only.

use crate::catalog::descriptor::ModelDescriptor;
use crate::catalog::error::CatalogError;
use crate::catalog::modality::{Modality, ModalityWeights};
use std::collections::HashSet;

/// Immutable model registry (Entity)
///
/// There is no mutation API; share it across threads behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    models: Vec<ModelDescriptor>,
    modality_weights: ModalityWeights,
}

impl Catalog {
    /// Validate and build a catalog.
    ///
    /// Rejects duplicate ids, descriptors that break their own invariants,
    /// and non-positive modality weights.
    pub fn new(
        models: Vec<ModelDescriptor>,
        modality_weights: ModalityWeights,
    ) -> Result<Self, CatalogError> {
        for modality in Modality::ALL {
            let weight = modality_weights.get(modality);
            if !(weight.is_finite() && weight > 0.0) {
                return Err(CatalogError::InvalidModalityWeight { modality, weight });
            }
        }

        let mut seen = HashSet::new();
        for model in &models {
            model.validate()?;
            if !seen.insert(model.id.as_str()) {
                return Err(CatalogError::DuplicateId(model.id.clone()));
            }
        }

        Ok(Self {
            models,
            modality_weights,
        })
    }

    /// A catalog with no models and default weights
    pub fn empty() -> Self {
        Self {
            models: Vec::new(),
            modality_weights: ModalityWeights::default(),
        }
    }

    /// All descriptors, in catalog order
    pub fn list_models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    /// Fixed weight of a modality, used by the token estimator
    pub fn modality_weight(&self, modality: Modality) -> f64 {
        self.modality_weights.get(modality)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Number of models that support `modality`
    pub fn coverage(&self, modality: Modality) -> usize {
        self.models.iter().filter(|m| m.supports(modality)).count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

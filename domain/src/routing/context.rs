//! Per-request routing context

use crate::catalog::ModalitySet;
use crate::core::prompt::Prompt;
use crate::routing::priority::Priority;
use crate::routing::tone::Tone;
use serde::{Deserialize, Serialize};

/// Everything the engine needs to know about one routing request.
///
/// Built by the request boundary after normalization and dropped once the
/// response has been assembled.
///
/// # Example
///
/// ```
/// use paikeys_domain::{Modality, ModalitySet, Priority, Prompt, RoutingContext, Tone};
///
/// let context = RoutingContext::new(Prompt::try_new("Caption product photos").unwrap())
///     .with_priority(Priority::Speed)
///     .with_modalities(ModalitySet::single(Modality::Vision));
///
/// assert_eq!(context.tone, Tone::Balanced);
/// assert!(context.modalities.contains(Modality::Vision));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingContext {
    pub prompt: Prompt,
    pub priority: Priority,
    pub tone: Tone,
    pub modalities: ModalitySet,
}

impl RoutingContext {
    /// Context with default priority, tone and modalities
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            priority: Priority::default(),
            tone: Tone::default(),
            modalities: ModalitySet::default(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_modalities(mut self, modalities: ModalitySet) -> Self {
        self.modalities = modalities;
        self
    }
}

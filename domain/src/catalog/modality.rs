//! Modality value objects
//!
//! [`Modality`] is the closed set of input kinds a model can accept.
//! [`ModalitySet`] is a non-empty, ordered set of them, and
//! [`ModalityWeights`] holds the per-modality constants used for token estimates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Input modality a model supports or a task requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Vision,
    Audio,
}

impl Modality {
    /// Every modality, in canonical order
    pub const ALL: [Modality; 3] = [Modality::Text, Modality::Vision, Modality::Audio];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Vision => "vision",
            Modality::Audio => "audio",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Modality::Text),
            "vision" => Ok(Modality::Vision),
            "audio" => Ok(Modality::Audio),
            _ => Err(format!("Unknown modality: {}", s)),
        }
    }
}

/// Non-empty set of modalities, iterated in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Modality>", into = "Vec<Modality>")]
pub struct ModalitySet(BTreeSet<Modality>);

impl ModalitySet {
    /// Build a set from the given modalities, returning None if there are none
    pub fn new(modalities: impl IntoIterator<Item = Modality>) -> Option<Self> {
        let set: BTreeSet<Modality> = modalities.into_iter().collect();
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    /// A set holding exactly one modality
    pub fn single(modality: Modality) -> Self {
        Self(BTreeSet::from([modality]))
    }

    /// Permissive normalization for untrusted input.
    ///
    /// Only exact lowercase names are recognized. Anything else is dropped
    /// silently; if nothing recognizable remains (or no values were given)
    /// the result is `{text}`.
    pub fn normalize<S: AsRef<str>>(raw: &[S]) -> Self {
        Self::new(raw.iter().filter_map(|value| value.as_ref().parse().ok()))
            .unwrap_or_default()
    }

    pub fn contains(&self, modality: Modality) -> bool {
        self.0.contains(&modality)
    }

    /// True when the two sets share at least one modality
    pub fn intersects(&self, other: &ModalitySet) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Modality> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-separated display form, e.g. `text, vision`
    pub fn joined(&self) -> String {
        self.iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ModalitySet {
    fn default() -> Self {
        Self::single(Modality::Text)
    }
}

impl TryFrom<Vec<Modality>> for ModalitySet {
    type Error = String;

    fn try_from(value: Vec<Modality>) -> Result<Self, Self::Error> {
        ModalitySet::new(value).ok_or_else(|| "modality set cannot be empty".to_string())
    }
}

impl From<ModalitySet> for Vec<Modality> {
    fn from(set: ModalitySet) -> Self {
        set.0.into_iter().collect()
    }
}

/// Fixed per-modality weights used by the token estimator.
///
/// One field per [`Modality`] variant, so every modality has a weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalityWeights {
    pub text: f64,
    pub vision: f64,
    pub audio: f64,
}

impl ModalityWeights {
    pub fn new(text: f64, vision: f64, audio: f64) -> Self {
        Self {
            text,
            vision,
            audio,
        }
    }

    pub fn get(&self, modality: Modality) -> f64 {
        match modality {
            Modality::Text => self.text,
            Modality::Vision => self.vision,
            Modality::Audio => self.audio,
        }
    }
}

impl Default for ModalityWeights {
    fn default() -> Self {
        Self {
            text: 1.0,
            vision: 1.6,
            audio: 1.3,
        }
    }
}

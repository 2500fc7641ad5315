//! Prompt value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The caller's task description (Value Object)
///
/// Always stored trimmed and never blank. Construction goes through
/// [`Prompt::try_new`], so an empty prompt cannot reach the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Try to create a prompt, returning None if it is blank after trimming
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Like [`Prompt::try_new`], failing with [`DomainError::InvalidPrompt`]
    pub fn parse(content: impl AsRef<str>) -> Result<Self, DomainError> {
        Self::try_new(content)
            .ok_or_else(|| DomainError::InvalidPrompt("prompt cannot be blank".to_string()))
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters, the unit used by the token estimator.
    ///
    /// Counts Unicode scalar values, not UTF-16 code units, so "😀" is 1
    /// here where a JavaScript `length` would report 2.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Prompt {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Prompt::parse(value)
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.content
    }
}

//! Core domain concepts shared across all subdomains.
//!
//! - [`prompt::Prompt`]: a validated, trimmed task description
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod prompt;

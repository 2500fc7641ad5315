//! Insight generation.
//!
//! [`FamilyNotes`] summarizes each model family once; [`build_insights`]
//! turns a selection into short, non-redundant commentary.

pub mod family;
pub mod generator;

pub use family::FamilyNotes;
pub use generator::{MAX_INSIGHTS, build_insights};

//! Routing request vocabulary.
//!
//! Closed enumerations for [`Priority`] and [`Tone`], each with a strict
//! `FromStr` and a permissive `normalize`, plus the [`RoutingContext`]
//! value built once per request.

pub mod context;
pub mod priority;
pub mod tone;

pub use context::RoutingContext;
pub use priority::Priority;
pub use tone::Tone;

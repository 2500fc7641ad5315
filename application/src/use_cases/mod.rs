//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod list_catalog;
pub mod route_task;

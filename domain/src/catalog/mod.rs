//! Catalog store.
//!
//! - [`ModelDescriptor`]: one static catalog entry
//! - [`Modality`] / [`ModalitySet`]: closed set of input kinds
//! - [`Catalog`]: validated, immutable registry plus modality weights
//! - [`CatalogError`]: invariant violations found at construction time

pub mod descriptor;
pub mod error;
pub mod modality;
pub mod store;

pub use descriptor::{ModelDescriptor, QUALITY_MAX};
pub use error::CatalogError;
pub use modality::{Modality, ModalitySet, ModalityWeights};
pub use store::Catalog;

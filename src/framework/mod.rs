//! Generic registry framework for catalog entities.
//!
//! This module provides the building blocks the catalog is assembled from.
//!
//! # Main Components
//!
//! - [`CatalogEntity`] - Trait that stored entity types implement
//! - [`Registry`] - Generic ordered, append-only store scanned by the relationship queries

pub mod core;

// Re-export core types for convenience
pub use self::core::*;

//! # Catalog Lifecycle
//!
//! This module owns the runtime state of the system: the [`Catalog`] that holds the
//! registries, and the tracing setup used by the demo binary.
//!
//! ## The Catalog Pattern
//!
//! Entities never reach for a bare global. Each one remembers the catalog it was
//! created in, and every relationship query scans that catalog's registries:
//!
//! ```rust,ignore
//! let catalog = Catalog::new();
//! let sam = catalog.author("Sam")?;
//! let vogue = catalog.magazine("Vogue", "Fashion")?;
//! sam.add_article(&vogue, "Spring Lines")?;   // registered in `catalog`
//! ```
//!
//! The plain constructors (`Author::new`, `Magazine::new`) use [`Catalog::global`],
//! which is initialized once on first use and lives for the rest of the process.
//!
//! ## Resetting
//!
//! Registries only grow. [`Catalog::reset`] is the single way to empty them, and exists
//! so that test suites sharing a catalog do not depend on the order they run in.

pub mod catalog;
pub mod tracing;

pub use catalog::Catalog;
pub(crate) use catalog::CatalogState;
pub use self::tracing::setup_tracing;

//! # Magazine Catalog
//!
//! > **Authors, magazines and the articles that connect them.**
//!
//! This crate models a many-to-many relationship between three in-memory entities.
//! An [`Article`](model::Article) joins one [`Author`](model::Author) to one
//! [`Magazine`](model::Magazine); both sides can then answer questions such as
//! "which topics does this author write about?" or "who has written more than two
//! articles for this magazine?".
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Validated Once, Frozen After
//! Every constructor validates all of its fields and either returns a finished handle
//! or a [`ValidationError`](validation::ValidationError). Article titles, article
//! references and author names have no setters, so they cannot change after
//! construction. Magazines are the exception: their name and category can be updated,
//! through the same rules as the constructor.
//!
//! ### Registries, Not Indices
//! Articles register themselves in their catalog's article registry when they are
//! created. Relationship queries scan that registry on demand; there are no caches to
//! keep in sync.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Store ([`framework`])
//! The generic, append-only [`Registry`](framework::Registry) and the
//! [`CatalogEntity`](framework::CatalogEntity) trait its entries implement.
//!
//! ### 2. The Owner ([`lifecycle`])
//! The [`Catalog`](lifecycle::Catalog) that holds the registries, plus tracing setup.
//!
//! ### 3. The Entities ([`model`])
//! [`Author`](model::Author), [`Magazine`](model::Magazine), [`Article`](model::Article)
//! and their typed IDs.
//!
//! ### 4. The Queries ([`relations`])
//! Derived relationship queries, implemented on the entities.
//!
//! ### 5. The Rules ([`validation`])
//! Field constraints and the single error type they report.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use magazine_catalog::model::{Author, Magazine};
//!
//! let sam = Author::new("Sam").unwrap();
//! let vogue = Magazine::new("Vogue", "Fashion").unwrap();
//!
//! for title in ["Spring Lines", "Summer Lines", "Autumn Lines"] {
//!     sam.add_article(&vogue, title).unwrap();
//! }
//!
//! let contributors = vogue.contributing_authors().unwrap();
//! assert!(contributors.contains(&sam));
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod relations;
pub mod validation;

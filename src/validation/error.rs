//! Error types for catalog validation.

use crate::model::{AuthorId, MagazineId};
use thiserror::Error;

/// Errors raised when an author, magazine or article fails validation.
///
/// Construction either succeeds completely or fails with one of these variants;
/// a failed construction never leaves a partial entry in any registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The author name is empty or whitespace only.
    #[error("Author name must not be empty")]
    EmptyAuthorName,

    /// The magazine name is too short or too long.
    #[error("Magazine name must be {min}-{max} characters long, got {length}")]
    MagazineNameLength { length: usize, min: usize, max: usize },

    /// The magazine category is empty or whitespace only.
    #[error("Magazine category must not be empty")]
    EmptyCategory,

    /// The article title is too short or too long.
    #[error("Article title must be {min}-{max} characters long, got {length}")]
    TitleLength { length: usize, min: usize, max: usize },

    /// The author and magazine of an article were created in different catalogs.
    #[error("{author} and {magazine} belong to different catalogs")]
    CatalogMismatch {
        author: AuthorId,
        magazine: MagazineId,
    },

    /// The magazine was cleared out of its catalog by a reset.
    #[error("{magazine} was removed by a catalog reset")]
    StaleMagazine { magazine: MagazineId },

    /// The catalog the entity was created in has been dropped.
    #[error("Catalog is no longer available")]
    CatalogClosed,
}

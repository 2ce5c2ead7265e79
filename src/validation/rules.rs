//! Field rules shared by the catalog entities.
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes, so
//! "Élan" is a four character magazine name.

use super::ValidationError;
use std::ops::RangeInclusive;

/// Allowed article title length.
pub const TITLE_LENGTH: RangeInclusive<usize> = 5..=50;

/// Allowed magazine name length.
pub const MAGAZINE_NAME_LENGTH: RangeInclusive<usize> = 2..=16;

/// An author contributes to a magazine once they have written strictly more
/// than this many articles for it.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Checks an author name: must not be blank.
pub fn author_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

/// Checks a magazine name against [`MAGAZINE_NAME_LENGTH`].
pub fn magazine_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if !MAGAZINE_NAME_LENGTH.contains(&length) {
        return Err(ValidationError::MagazineNameLength {
            length,
            min: *MAGAZINE_NAME_LENGTH.start(),
            max: *MAGAZINE_NAME_LENGTH.end(),
        });
    }
    Ok(())
}

/// Checks a magazine category: must not be blank.
pub fn category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

/// Checks an article title against [`TITLE_LENGTH`].
pub fn title(title: &str) -> Result<(), ValidationError> {
    let length = title.chars().count();
    if !TITLE_LENGTH.contains(&length) {
        return Err(ValidationError::TitleLength {
            length,
            min: *TITLE_LENGTH.start(),
            max: *TITLE_LENGTH.end(),
        });
    }
    Ok(())
}

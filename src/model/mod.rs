//! Catalog entities: [`Author`], [`Magazine`] and the [`Article`] that joins them.

pub mod article;
pub mod author;
pub mod magazine;

pub use article::*;
pub use author::*;
pub use magazine::*;

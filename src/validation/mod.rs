//! Validation rules and the error type every constructor reports.

pub mod error;
pub mod rules;

pub use error::*;

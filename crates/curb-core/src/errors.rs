//! Error types for curbside.
//!
//! The only fallible layer in the workspace is date construction and
//! arithmetic; every holiday rule is total over valid dates.

use thiserror::Error;

/// The error type shared across the curbside crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout curbside.
pub type Result<T, E = Error> = std::result::Result<T, E>;

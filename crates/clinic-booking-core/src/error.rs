//! Error types for page wiring.
//!
//! User mistakes (no doctor selected, past dates, unknown references) are not
//! errors: handlers report them through [`crate::Outcome`]. `ClinicError` only
//! covers a page that is wired wrong or a surface that refuses an operation.

use thiserror::Error;

/// Wiring errors.
#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Surface error: {0}")]
    Surface(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type ClinicResult<T> = Result<T, ClinicError>;

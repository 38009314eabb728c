//! Commerce error types.
//!
//! Cart, filter and navigation operations are total and never produce
//! these; they only surface when text from outside (a CLI argument, a
//! config value) is parsed into a domain type.

use thiserror::Error;

/// Errors raised while parsing external input into domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Page slug does not name a known page.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Currency code is not supported.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Product identifier is not a valid integer.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),
}

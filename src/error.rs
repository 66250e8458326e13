//! Error types for the rental charge engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation engine itself is a total function and has no error paths;
//! every variant here belongs to the boundary around it: input validation,
//! catalog lookup, and catalog loading.

use thiserror::Error;

/// The main error type for the rental charge engine.
///
/// # Example
///
/// ```
/// use rental_engine::error::PosError;
///
/// let error = PosError::ToolNotFound {
///     code: "0000".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tool not found: 0000");
/// ```
#[derive(Debug, Error)]
pub enum PosError {
    /// The rental day count was zero or negative.
    #[error("Invalid rental day count: {day_count} (must be at least 1)")]
    InvalidDayCount {
        /// The rejected day count.
        day_count: i64,
    },

    /// The discount percent was outside the range 0-100.
    #[error("Invalid discount percent: {discount_percent} (must be between 0 and 100)")]
    InvalidDiscount {
        /// The rejected discount percent.
        discount_percent: i64,
    },

    /// No tool with the given code exists in the catalog.
    #[error("Tool not found: {code}")]
    ToolNotFound {
        /// The tool code that was not found.
        code: String,
    },

    /// A catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tool entry referenced a policy that does not exist in the catalog.
    #[error("Tool '{tool_code}' references unknown policy: {policy}")]
    UnknownPolicy {
        /// The tool code carrying the dangling reference.
        tool_code: String,
        /// The policy key that was not found.
        policy: String,
    },
}

/// A type alias for Results that return PosError.
pub type PosResult<T> = Result<T, PosError>;

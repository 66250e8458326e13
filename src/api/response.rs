//! Response types for the rental charge engine API.
//!
//! This module defines the error response structures and the mapping from
//! [`PosError`] to HTTP status codes and error bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PosError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PosError> for ApiErrorResponse {
    fn from(error: PosError) -> Self {
        match error {
            PosError::InvalidDayCount { day_count } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DAY_COUNT",
                    format!("Invalid rental day count: {}", day_count),
                    "The rental day count must be at least 1",
                ),
            },
            PosError::InvalidDiscount { discount_percent } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DISCOUNT",
                    format!("Invalid discount percent: {}", discount_percent),
                    "The discount percent must be between 0 and 100",
                ),
            },
            PosError::ToolNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TOOL_NOT_FOUND",
                    format!("Tool not found: {}", code),
                    format!("No tool with code '{}' exists in the catalog", code),
                ),
            },
            PosError::CatalogNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog error",
                    format!("Catalog file not found: {}", path),
                ),
            },
            PosError::CatalogParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PosError::UnknownPolicy { tool_code, policy } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog resolution error",
                    format!("Tool '{}' references unknown policy: {}", tool_code, policy),
                ),
            },
        }
    }
}

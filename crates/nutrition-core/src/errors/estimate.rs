// ABOUTME: Caller-facing error taxonomy of the nutrition estimation orchestrator
// ABOUTME: EmptyQuery and NotFound, with conversion into AppError for HTTP responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Message returned for blank queries
pub const EMPTY_QUERY_MESSAGE: &str = "Query is required";

/// Message returned when neither the remote API nor the catalog knows the food
pub const NOT_FOUND_MESSAGE: &str = "Food not found in nutrition database";

/// Failures an estimate request can surface to its caller.
///
/// Remote lookup failures never appear here: the orchestrator logs them and
/// falls through to the local catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Query was blank after trimming; no lookup was attempted
    #[error("Query is required")]
    EmptyQuery,
    /// Both the remote tier (when attempted) and every local tier came up empty
    #[error("Food not found in nutrition database")]
    NotFound {
        /// Trimmed query that failed to resolve
        query: String,
    },
}

impl EstimateError {
    /// Create a "not found" error for the given query
    #[must_use]
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }
}

impl From<EstimateError> for AppError {
    fn from(error: EstimateError) -> Self {
        match error {
            EstimateError::EmptyQuery => Self::invalid_input(EMPTY_QUERY_MESSAGE),
            EstimateError::NotFound { .. } => {
                Self::new(ErrorCode::ResourceNotFound, NOT_FOUND_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_maps_to_bad_request() {
        let app: AppError = EstimateError::EmptyQuery.into();
        assert_eq!(app.code, ErrorCode::InvalidInput);
        assert_eq!(app.http_status(), 400);
        assert_eq!(app.message, "Query is required");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = EstimateError::not_found("dragonfruit soup");
        assert_eq!(error.to_string(), "Food not found in nutrition database");

        let app: AppError = error.into();
        assert_eq!(app.http_status(), 404);
    }
}

// ABOUTME: Route handlers for the nutrition estimate REST API
// ABOUTME: Maps estimator results onto 200, 400, 404, and 503 JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition estimate routes
//!
//! - `GET /api/nutrition/estimate?query=<text>`
//! - `GET /api/users/food-calories?query=<text>` (legacy path, same handler)
//!
//! No authentication is applied to either path.

use crate::{
    errors::{AppError, EstimateError},
    models::NutritionEstimate,
    resources::ServerResources,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Message for lookups that cannot be served at all
const UNAVAILABLE_MESSAGE: &str = "Unable to fetch nutrition data right now";

/// Query string of an estimate request
#[derive(Debug, Default, Deserialize)]
pub struct EstimateQuery {
    /// Free-text food description; absent is treated like blank
    #[serde(default)]
    pub query: Option<String>,
}

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/nutrition/estimate", get(Self::handle_estimate))
            .route("/api/users/food-calories", get(Self::handle_estimate))
            .with_state(resources)
    }

    /// Handle GET /api/nutrition/estimate
    async fn handle_estimate(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<EstimateQuery>,
    ) -> Result<Json<NutritionEstimate>, AppError> {
        let query = params.query.unwrap_or_default();
        let estimator = &resources.estimator;

        match estimator.estimate(&query).await {
            Ok(estimate) => Ok(Json(estimate)),
            Err(EstimateError::NotFound { query }) if !estimator.has_sources() => {
                warn!(
                    nutrition.query = %query,
                    "No nutrition source available: remote API disabled and catalog empty"
                );
                Err(AppError::service_unavailable(UNAVAILABLE_MESSAGE))
            }
            Err(e) => Err(e.into()),
        }
    }
}

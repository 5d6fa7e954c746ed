// ABOUTME: Route module organization for the nutrition estimator HTTP endpoints
// ABOUTME: Assembles domain routers and wraps them in tracing, CORS, and timeout layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the nutrition estimator
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the estimator held in [`ServerResources`].

/// Health check and readiness routes
pub mod health;
/// Nutrition estimate routes
pub mod nutrition;

/// Health check route handlers
pub use health::HealthRoutes;
/// Nutrition estimate route handlers
pub use nutrition::NutritionRoutes;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Build the complete application router
///
/// Layers, outermost first: request tracing, CORS, request timeout.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_timeout = Duration::from_secs(resources.config.request_timeout_secs);
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(&resources.config))
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(resources))
        .layer(middleware)
}

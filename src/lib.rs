// ABOUTME: Main library entry point for the nutrition estimator service
// ABOUTME: Remote-first calorie lookup with a fuzzy-matched local catalog fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Estimator
//!
//! Turns a free-text food description ("1 cup rice", "apple") into a
//! calorie estimate.
//!
//! ## Lookup order
//!
//! 1. When `CALORIE_NINJAS_API_KEY` is configured, the CalorieNinjas API is
//!    queried once. A successful answer is returned as is.
//! 2. On any remote failure, or without a key, the query is matched against
//!    the bundled food catalog: exact name or keyword, then substring, then
//!    token overlap.
//! 3. Nothing matched: [`errors::EstimateError::NotFound`].
//!
//! ## Architecture
//!
//! - **External**: the CalorieNinjas client behind the `NutritionApi` trait
//! - **Nutrition**: catalog loader, matcher, and the estimator orchestrator
//! - **Routes**: the REST surface (`/api/nutrition/estimate`, health checks)
//! - **Config**: environment-based configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_estimator::nutrition::{FoodCatalog, NutritionEstimator};
//! use nutrition_estimator::models::CatalogRecord;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let catalog = FoodCatalog::from_records(vec![CatalogRecord::new("Apple (1 medium)", 95.0)]);
//! let estimator = NutritionEstimator::new(Arc::new(catalog));
//!
//! if let Ok(estimate) = estimator.estimate("apple").await {
//!     println!("{}: {} kcal", estimate.name, estimate.calories_per_serving);
//! }
//! # }
//! ```

/// Environment-based configuration
pub mod config;

/// Constants re-exported from the core crate
pub mod constants;

/// Error types re-exported from the core crate
pub mod errors;

/// Clients for remote nutrition APIs
pub mod external;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Data models re-exported from the core crate
pub mod models;

/// Catalog, matcher, and estimation orchestrator
pub mod nutrition;

/// Shared resources handed to HTTP handlers
pub mod resources;

/// REST routes
pub mod routes;

/// HTTP server bootstrap
pub mod server;

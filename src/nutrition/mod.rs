// ABOUTME: Nutrition estimation engine: fallback catalog, tiered matcher, and orchestrator
// ABOUTME: Resolves free-text food queries to calorie estimates, remote first then local
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Estimation
//!
//! A query is trimmed and validated, tried against the remote nutrition API
//! when a credential is configured, and otherwise (or on any remote failure)
//! resolved against the local food catalog:
//!
//! - [`catalog`]: loads the fallback dataset once into an immutable [`FoodCatalog`]
//! - [`matcher`]: exact, substring, then token-overlap matching over the catalog
//! - [`estimator`]: the [`NutritionEstimator`] orchestrating both sources

/// Fallback dataset loader
pub mod catalog;
/// Orchestration of remote and local lookups
pub mod estimator;
/// Three-tier fuzzy matching over the catalog
pub mod matcher;

pub use catalog::FoodCatalog;
pub use estimator::NutritionEstimator;
pub use matcher::{find_match, normalize_query, CatalogMatch, MatchTier};

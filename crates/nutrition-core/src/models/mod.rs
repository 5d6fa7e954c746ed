// ABOUTME: Core data models for nutrition estimation
// ABOUTME: Re-exports catalog entries, dataset records, provenance, and estimate types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by the estimator, the HTTP layer, and the tests.

/// Catalog, provenance, and estimate models
pub mod nutrition;

pub use nutrition::{
    CatalogRecord, EstimateSource, FoodCatalogEntry, InvalidCatalogRecord, NutritionEstimate,
};

// ABOUTME: Re-exports nutrition models from nutrition-core
// ABOUTME: FoodCatalogEntry, CatalogRecord, EstimateSource, and NutritionEstimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrition_core::models::*;

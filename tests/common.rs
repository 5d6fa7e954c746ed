// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, synthetic catalogs, and estimator/resource builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_estimator`

use nutrition_estimator::{
    config::{NutritionConfig, ServerConfig},
    models::CatalogRecord,
    nutrition::{FoodCatalog, NutritionEstimator},
    resources::ServerResources,
};
use std::path::PathBuf;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary helper may have installed one already
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Path of the dataset shipped with the crate
pub fn bundled_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/nutrition_fallback.json")
}

/// Small synthetic catalog covering every matching tier
pub fn sample_catalog() -> Arc<FoodCatalog> {
    Arc::new(FoodCatalog::from_records(vec![
        CatalogRecord::new("Apple (1 medium)", 95.0)
            .with_serving_size(182.0)
            .with_keywords(["apple", "red apple"]),
        CatalogRecord::new("Banana (1 medium)", 105.0).with_keywords(["banana"]),
        CatalogRecord::new("Rice, cooked (1 cup)", 206.0)
            .with_serving_size(158.0)
            .with_keywords(["white rice"]),
        CatalogRecord::new("Chicken breast, cooked (100g)", 165.0)
            .with_serving_size(100.0)
            .with_keywords(["poultry"])
            .with_source("local"),
    ]))
}

/// Nutrition configuration pointing the remote tier at `base_url`
pub fn remote_config(base_url: &str, timeout_secs: u64) -> NutritionConfig {
    NutritionConfig {
        api_key: Some("test-api-key".to_owned()),
        base_url: base_url.to_owned(),
        timeout_secs,
        connect_timeout_secs: timeout_secs,
        ..NutritionConfig::default()
    }
}

/// Estimator using the remote API at `base_url` and the sample catalog
pub fn remote_estimator(base_url: &str, timeout_secs: u64) -> NutritionEstimator {
    NutritionEstimator::from_config(&remote_config(base_url, timeout_secs), sample_catalog())
        .unwrap()
}

/// Server resources around an estimator, with default server settings
pub fn resources_with(estimator: NutritionEstimator) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(ServerConfig::default(), estimator))
}

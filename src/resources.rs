// ABOUTME: Shared resource container handed to every HTTP handler
// ABOUTME: Holds the loaded configuration and the nutrition estimator built from it
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Server Resources
//!
//! Built once at startup: the catalog is loaded, the remote client is
//! created, and both are shared with handlers through `Arc<ServerResources>`.

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::nutrition::{FoodCatalog, NutritionEstimator};
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
    /// Remote-first nutrition estimator
    pub estimator: Arc<NutritionEstimator>,
}

impl ServerResources {
    /// Wrap an already-built estimator
    #[must_use]
    pub fn new(config: ServerConfig, estimator: NutritionEstimator) -> Self {
        Self {
            config: Arc::new(config),
            estimator: Arc::new(estimator),
        }
    }

    /// Load the fallback catalog and build the estimator from configuration
    ///
    /// A missing or malformed catalog leaves the estimator with an empty
    /// catalog rather than failing.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the remote HTTP client cannot be built
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let catalog = Arc::new(FoodCatalog::load(&config.nutrition.fallback_path));
        let estimator = NutritionEstimator::from_config(&config.nutrition, catalog)?;
        Ok(Self::new(config, estimator))
    }
}

// ABOUTME: Estimation orchestrator sequencing the remote nutrition API and the local catalog
// ABOUTME: Validates queries, logs remote failures, and returns one normalized estimate shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Estimation orchestrator
//!
//! [`NutritionEstimator::estimate`] trims the query, tries the remote API when
//! one is configured, and falls back to the local catalog on any remote
//! failure. Remote failures are logged at `warn` and never returned; callers
//! only ever see [`EstimateError::EmptyQuery`] or [`EstimateError::NotFound`].

use std::sync::Arc;

use tracing::{debug, warn};

use super::catalog::FoodCatalog;
use crate::config::NutritionConfig;
use crate::errors::{AppResult, EstimateError};
use crate::external::{CalorieNinjasClient, NutritionApi};
use crate::models::NutritionEstimate;

/// Remote-first, catalog-fallback nutrition estimator
#[derive(Clone)]
pub struct NutritionEstimator {
    catalog: Arc<FoodCatalog>,
    remote: Option<Arc<dyn NutritionApi>>,
}

impl NutritionEstimator {
    /// Estimator backed only by the local catalog
    #[must_use]
    pub const fn new(catalog: Arc<FoodCatalog>) -> Self {
        Self {
            catalog,
            remote: None,
        }
    }

    /// Attach a remote nutrition API tried before the catalog
    #[must_use]
    pub fn with_remote(mut self, remote: Arc<dyn NutritionApi>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Build an estimator from configuration
    ///
    /// The remote tier is enabled only when a credential is configured.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the remote HTTP client cannot be built
    pub fn from_config(config: &NutritionConfig, catalog: Arc<FoodCatalog>) -> AppResult<Self> {
        let estimator = Self::new(catalog);
        match config.calorie_ninjas() {
            Some(client_config) => {
                let client = CalorieNinjasClient::new(client_config)?;
                Ok(estimator.with_remote(Arc::new(client)))
            }
            None => {
                debug!("No nutrition API credential configured, remote lookups disabled");
                Ok(estimator)
            }
        }
    }

    /// Shared catalog handle
    #[must_use]
    pub fn catalog(&self) -> &Arc<FoodCatalog> {
        &self.catalog
    }

    /// Whether a remote API is consulted first
    #[must_use]
    pub const fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    /// Whether any lookup source exists at all
    ///
    /// False means every non-blank query is bound to fail: no remote API and
    /// an empty catalog.
    #[must_use]
    pub fn has_sources(&self) -> bool {
        self.remote_enabled() || !self.catalog.is_empty()
    }

    /// Estimate calories for a free-text food query
    ///
    /// # Errors
    ///
    /// - [`EstimateError::EmptyQuery`] when the trimmed query is empty
    /// - [`EstimateError::NotFound`] when neither source resolves it
    pub async fn estimate(&self, query: &str) -> Result<NutritionEstimate, EstimateError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(EstimateError::EmptyQuery);
        }

        if let Some(remote) = &self.remote {
            match remote.lookup(query).await {
                Ok(estimate) => {
                    debug!(
                        nutrition.provider = remote.provider_name(),
                        nutrition.query = query,
                        "Resolved estimate from remote API"
                    );
                    return Ok(estimate);
                }
                Err(e) => {
                    warn!(
                        nutrition.provider = remote.provider_name(),
                        nutrition.failure = e.kind(),
                        nutrition.query = query,
                        error = %e,
                        "Remote nutrition lookup failed, falling back to local catalog"
                    );
                }
            }
        }

        match self.catalog.find(query) {
            Some(found) => {
                debug!(
                    nutrition.query = query,
                    nutrition.tier = found.tier.as_str(),
                    nutrition.entry = %found.entry.name,
                    "Resolved estimate from local catalog"
                );
                Ok(NutritionEstimate::from(found.entry))
            }
            None => Err(EstimateError::not_found(query)),
        }
    }
}

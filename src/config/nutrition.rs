// ABOUTME: Nutrition lookup configuration for the remote API and the fallback catalog
// ABOUTME: Reads the CalorieNinjas credential, endpoint, timeouts, and dataset path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::environment::{env_var_or, parse_env_or};
use crate::constants::{env_config, nutrition};
use crate::errors::AppResult;
use crate::external::CalorieNinjasConfig;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Nutrition lookup configuration
#[derive(Clone)]
pub struct NutritionConfig {
    /// Remote API credential; `None` disables the remote tier
    pub api_key: Option<String>,
    /// Remote nutrition endpoint
    pub base_url: String,
    /// Remote request timeout (seconds)
    pub timeout_secs: u64,
    /// Remote connect timeout (seconds)
    pub connect_timeout_secs: u64,
    /// Fallback catalog location
    pub fallback_path: PathBuf,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: nutrition::DEFAULT_CALORIE_NINJAS_URL.to_owned(),
            timeout_secs: nutrition::DEFAULT_API_TIMEOUT_SECS,
            connect_timeout_secs: nutrition::DEFAULT_API_CONNECT_TIMEOUT_SECS,
            fallback_path: PathBuf::from(nutrition::DEFAULT_FALLBACK_PATH),
        }
    }
}

// Manual impl keeps the credential out of logs.
impl fmt::Debug for NutritionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("fallback_path", &self.fallback_path)
            .finish()
    }
}

impl NutritionConfig {
    /// Load nutrition configuration from environment
    ///
    /// A blank `CALORIE_NINJAS_API_KEY` counts as unset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a timeout value cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(env_config::CALORIE_NINJAS_API_KEY)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());

        Ok(Self {
            api_key,
            base_url: env_var_or(
                env_config::CALORIE_NINJAS_BASE_URL,
                nutrition::DEFAULT_CALORIE_NINJAS_URL,
            ),
            timeout_secs: parse_env_or(
                env_config::NUTRITION_API_TIMEOUT_SECS,
                nutrition::DEFAULT_API_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_env_or(
                env_config::NUTRITION_API_CONNECT_TIMEOUT_SECS,
                nutrition::DEFAULT_API_CONNECT_TIMEOUT_SECS,
            )?,
            fallback_path: PathBuf::from(env_var_or(
                env_config::NUTRITION_FALLBACK_PATH,
                nutrition::DEFAULT_FALLBACK_PATH,
            )),
        })
    }

    /// Whether a credential is configured, enabling the remote tier
    #[must_use]
    pub const fn remote_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Remote client settings, or `None` when no credential is configured
    #[must_use]
    pub fn calorie_ninjas(&self) -> Option<CalorieNinjasConfig> {
        self.api_key.as_ref().map(|api_key| CalorieNinjasConfig {
            api_key: api_key.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            connect_timeout_secs: self.connect_timeout_secs,
        })
    }
}

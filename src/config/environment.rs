// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP listener settings and assembles the nutrition configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use super::nutrition::NutritionConfig;
use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

/// Default HTTP port, matching the tracker's API server
const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default bind address
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default per-request timeout for the HTTP layer
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Any origin may call the API unless an allow-list is configured
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "*";

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP bind address
    pub host: String,
    /// Per-request timeout applied by the HTTP layer
    pub request_timeout_secs: u64,
    /// Comma-separated CORS origin allow-list, `*` for any origin
    pub cors_allowed_origins: String,
    /// Nutrition lookup configuration
    pub nutrition: NutritionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            host: DEFAULT_HOST.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            cors_allowed_origins: DEFAULT_CORS_ALLOWED_ORIGINS.to_owned(),
            nutrition: NutritionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            http_port: parse_env_or(env_config::HTTP_PORT, DEFAULT_HTTP_PORT)?,
            host: env_var_or(env_config::HOST, DEFAULT_HOST),
            request_timeout_secs: parse_env_or(
                env_config::REQUEST_TIMEOUT_SECS,
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            cors_allowed_origins: env_var_or(
                env_config::CORS_ALLOWED_ORIGINS,
                DEFAULT_CORS_ALLOWED_ORIGINS,
            ),
            nutrition: NutritionConfig::from_env()?,
        })
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line-per-setting summary for startup logs (never includes secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrition Estimator Configuration:\n\
             - HTTP Address: {}\n\
             - Request Timeout: {}s\n\
             - CORS Origins: {}\n\
             - Remote Nutrition API: {}\n\
             - Remote Timeout: {}s\n\
             - Fallback Catalog: {}",
            self.bind_address(),
            self.request_timeout_secs,
            self.cors_allowed_origins,
            if self.nutrition.remote_enabled() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.nutrition.timeout_secs,
            self.nutrition.fallback_path.display(),
        )
    }
}

/// Get environment variable or default value
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
///
/// # Errors
///
/// Returns a configuration error naming the variable when the value is set but invalid
pub(crate) fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

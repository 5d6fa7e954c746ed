// ABOUTME: CalorieNinjas nutrition API client for remote calorie estimates
// ABOUTME: Single-attempt lookup with timeouts, response coercion, and typed failure kinds

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! CalorieNinjas API Client
//!
//! Looks up a free-text food query against the CalorieNinjas nutrition
//! endpoint and normalizes the first returned item into a
//! [`NutritionEstimate`].
//!
//! # Behavior
//! - One outbound `GET` per lookup, never retried
//! - Credential sent in the `X-Api-Key` header, query in the `query` parameter
//! - Request and connect timeouts bounded by configuration
//! - Missing or malformed numeric fields coerce to `0` calories / no serving size
//!
//! Every failure is reported as a [`RemoteLookupError`] whose
//! [`kind`](RemoteLookupError::kind) tells timeouts, transport errors, HTTP
//! errors, unreadable bodies, and empty result lists apart.
//!
//! # Example
//! ```rust,no_run
//! use nutrition_estimator::external::{CalorieNinjasClient, CalorieNinjasConfig, NutritionApi};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CalorieNinjasClient::new(CalorieNinjasConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..CalorieNinjasConfig::default()
//! })?;
//! let estimate = client.lookup("1 cup rice").await?;
//! println!("{} kcal", estimate.calories_per_serving);
//! # Ok(())
//! # }
//! ```

use crate::constants::nutrition::{
    API_KEY_HEADER, DEFAULT_API_CONNECT_TIMEOUT_SECS, DEFAULT_API_TIMEOUT_SECS,
    DEFAULT_CALORIE_NINJAS_URL, REMOTE_PROVIDER_NAME,
};
use crate::errors::{AppError, AppResult};
use crate::models::{EstimateSource, NutritionEstimate};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Upper bound on the error-body excerpt kept for diagnostics
const ERROR_BODY_EXCERPT_CHARS: usize = 200;

/// A remote nutrition source consulted before the local catalog
#[async_trait]
pub trait NutritionApi: Send + Sync {
    /// Provider name used in logs
    fn provider_name(&self) -> &'static str;

    /// Look up a trimmed, non-empty query
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteLookupError`] describing why no estimate was produced
    async fn lookup(&self, query: &str) -> Result<NutritionEstimate, RemoteLookupError>;
}

/// Why a remote lookup produced no estimate
#[derive(Debug, Error)]
pub enum RemoteLookupError {
    /// Request exceeded the configured timeout
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout
        timeout_secs: u64,
    },
    /// Connection or transport failure
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// Upstream answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Leading excerpt of the response body
        body: String,
    },
    /// Body was not the expected JSON shape
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    /// Upstream returned no items for the query
    #[error("no results for query")]
    NoResults,
}

impl RemoteLookupError {
    /// Short, stable label for structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Network(_) => "network",
            Self::HttpStatus { .. } => "http_status",
            Self::MalformedBody(_) => "malformed_body",
            Self::NoResults => "no_results",
        }
    }
}

/// CalorieNinjas client configuration
#[derive(Clone)]
pub struct CalorieNinjasConfig {
    /// API credential sent in the `X-Api-Key` header
    pub api_key: String,
    /// Nutrition endpoint URL
    pub base_url: String,
    /// Whole-request timeout (seconds)
    pub timeout_secs: u64,
    /// Connect timeout (seconds)
    pub connect_timeout_secs: u64,
}

impl Default for CalorieNinjasConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_CALORIE_NINJAS_URL.to_owned(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for CalorieNinjasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalorieNinjasConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// CalorieNinjas nutrition API client
pub struct CalorieNinjasClient {
    config: CalorieNinjasConfig,
    http_client: Client,
}

impl CalorieNinjasClient {
    /// Create a new client with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: CalorieNinjasConfig) -> AppResult<Self> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| {
                AppError::config(format!("Failed to build {REMOTE_PROVIDER_NAME} HTTP client"))
                    .with_source(e)
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn classify(&self, error: reqwest::Error) -> RemoteLookupError {
        if error.is_timeout() {
            RemoteLookupError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            RemoteLookupError::Network(error)
        }
    }
}

#[async_trait]
impl NutritionApi for CalorieNinjasClient {
    fn provider_name(&self) -> &'static str {
        REMOTE_PROVIDER_NAME
    }

    async fn lookup(&self, query: &str) -> Result<NutritionEstimate, RemoteLookupError> {
        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[("query", query)])
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(RemoteLookupError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_EXCERPT_CHARS).collect(),
            });
        }

        debug!(
            nutrition.provider = REMOTE_PROVIDER_NAME,
            http.status = status.as_u16(),
            "Nutrition API responded"
        );

        parse_first_item(&body, query)
    }
}

/// Normalize the first item of a CalorieNinjas response body
///
/// A body without an `items` list, or with an empty one, is
/// [`RemoteLookupError::NoResults`]; anything that is not a JSON object
/// with an array of objects there is [`RemoteLookupError::MalformedBody`].
///
/// # Errors
///
/// Returns the failure kinds described above
pub fn parse_first_item(body: &str, query: &str) -> Result<NutritionEstimate, RemoteLookupError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| RemoteLookupError::MalformedBody(e.to_string()))?;

    let items = match payload.get("items") {
        None | Some(Value::Null) => return Err(RemoteLookupError::NoResults),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(RemoteLookupError::MalformedBody(format!(
                "expected `items` to be an array, found {other}"
            )))
        }
    };

    let item = match items.first() {
        None => return Err(RemoteLookupError::NoResults),
        Some(Value::Object(item)) => item,
        Some(other) => {
            return Err(RemoteLookupError::MalformedBody(format!(
                "expected item to be an object, found {other}"
            )))
        }
    };

    let name = item
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(query)
        .to_owned();

    Ok(NutritionEstimate {
        name,
        calories_per_serving: item.get("calories").and_then(coerce_number).unwrap_or(0.0),
        serving_size_grams: item
            .get("serving_size_g")
            .and_then(coerce_number)
            .filter(|grams| *grams > 0.0),
        source: EstimateSource::RemoteApi,
    })
}

/// Read a non-negative finite number from a JSON number or numeric string
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    (number.is_finite() && number >= 0.0).then_some(number)
}

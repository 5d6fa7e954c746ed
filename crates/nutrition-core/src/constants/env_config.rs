// ABOUTME: Environment variable names for service configuration
// ABOUTME: Single place to look up every key read by ServerConfig::from_env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP listen port
pub const HTTP_PORT: &str = "HTTP_PORT";
/// HTTP bind address
pub const HOST: &str = "HOST";
/// Per-request timeout for the HTTP layer
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
/// Comma-separated CORS origin allow-list, `*` for any
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
/// Remote nutrition API credential; unset or blank disables the remote tier
pub const CALORIE_NINJAS_API_KEY: &str = "CALORIE_NINJAS_API_KEY";
/// Remote nutrition API endpoint override
pub const CALORIE_NINJAS_BASE_URL: &str = "CALORIE_NINJAS_BASE_URL";
/// Remote lookup timeout
pub const NUTRITION_API_TIMEOUT_SECS: &str = "NUTRITION_API_TIMEOUT_SECS";
/// Remote lookup connect timeout
pub const NUTRITION_API_CONNECT_TIMEOUT_SECS: &str = "NUTRITION_API_CONNECT_TIMEOUT_SECS";
/// Fallback catalog location
pub const NUTRITION_FALLBACK_PATH: &str = "NUTRITION_FALLBACK_PATH";

// ABOUTME: Nutrition lookup constants shared by the catalog, the remote client, and the routes
// ABOUTME: Provenance tags, CalorieNinjas defaults, and catalog defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Provenance tag for estimates produced by the remote nutrition API
pub const SOURCE_REMOTE_API: &str = "remote-api";

/// Provenance tag for curated catalog entries (default for catalog records)
pub const SOURCE_LOCAL_DB: &str = "local-db";

/// Provenance tag for the built-in food list
pub const SOURCE_LOCAL: &str = "local";

/// Display name of the remote provider, used in logs and attribution
pub const REMOTE_PROVIDER_NAME: &str = "CalorieNinjas";

/// Default CalorieNinjas nutrition endpoint
pub const DEFAULT_CALORIE_NINJAS_URL: &str = "https://api.calorieninjas.com/v1/nutrition";

/// Header carrying the API credential
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Default request timeout for the remote lookup
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Default connect timeout for the remote lookup
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default location of the fallback catalog, relative to the working directory
pub const DEFAULT_FALLBACK_PATH: &str = "data/nutrition_fallback.json";

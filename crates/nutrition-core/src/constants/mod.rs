// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for provenance tags, service names, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Nutrition lookup constants (provenance tags, upstream defaults)
pub mod nutrition;

/// Environment variable names read by the configuration layer
pub mod env_config;

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const NUTRITION_ESTIMATOR: &str = "nutrition-estimator";
}

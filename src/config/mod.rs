// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server and nutrition lookup configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All configuration is read from process environment variables; there is
//! no configuration file:
//!
//! - **Environment**: HTTP listener settings and the assembled [`ServerConfig`]
//! - **Nutrition**: remote API credential, endpoint, timeouts, and catalog path

/// Environment and server configuration
pub mod environment;
/// Nutrition lookup configuration (remote API and fallback catalog)
pub mod nutrition;

pub use environment::ServerConfig;
pub use nutrition::NutritionConfig;

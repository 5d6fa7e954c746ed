// ABOUTME: External API client modules (CalorieNinjas nutrition lookup)
// ABOUTME: Provides the remote tier consulted before the local food catalog

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External API Clients
//!
//! This module contains clients for external APIs used by the nutrition estimator.

pub mod calorie_ninjas_client;

// Re-export commonly used types
pub use calorie_ninjas_client::{
    CalorieNinjasClient, CalorieNinjasConfig, NutritionApi, RemoteLookupError,
};

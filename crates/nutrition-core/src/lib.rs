// ABOUTME: Core types and constants for the nutrition estimation service
// ABOUTME: Foundation crate with error handling, nutrition models, and provenance constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! estimation service. It carries no I/O so that the estimator, the HTTP layer
//! and the tests can all depend on it cheaply.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `EstimateError`
//! - **models**: Catalog entries, dataset records, and the `NutritionEstimate` result
//! - **constants**: Provenance tags, service names, and environment variable names

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Nutrition data models (catalog entries, estimates, provenance)
pub mod models;

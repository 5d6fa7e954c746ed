// ABOUTME: Re-exports error types from nutrition-core for unified type identity
// ABOUTME: Ensures AppError/EstimateError are the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrition_core::errors::*;

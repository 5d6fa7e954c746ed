// ABOUTME: Re-exports constants from nutrition-core for unified access
// ABOUTME: Provenance tags, upstream defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrition_core::constants::*;

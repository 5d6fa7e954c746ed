// ABOUTME: Fallback food catalog loaded once from the bundled JSON dataset
// ABOUTME: Normalizes records into lowercased entries and degrades to an empty catalog on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fallback food catalog
//!
//! The dataset is a JSON array of [`CatalogRecord`]s. It is read once at
//! startup into an immutable [`FoodCatalog`] which is then shared behind an
//! `Arc` by every request. A missing or unreadable dataset never prevents the
//! service from starting: [`FoodCatalog::load`] logs a warning and returns an
//! empty catalog instead.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use super::matcher::{find_match, CatalogMatch};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{CatalogRecord, FoodCatalogEntry};

/// Immutable, pre-normalized food catalog
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    entries: Vec<FoodCatalogEntry>,
}

impl FoodCatalog {
    /// Catalog with no entries
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a catalog from raw records, skipping invalid ones
    ///
    /// Declaration order is preserved since it breaks ties during matching.
    #[must_use]
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let entries = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match FoodCatalogEntry::from_record(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(catalog.index = index, error = %e, "Skipping invalid catalog record");
                    None
                }
            })
            .collect();

        Self { entries }
    }

    /// Parse a catalog from JSON text
    ///
    /// Rows that do not deserialize into a [`CatalogRecord`] are skipped with
    /// a warning, like rows that fail validation.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not a JSON array
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let rows: Vec<Value> = serde_json::from_str(content).map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                format!("Invalid catalog JSON: {e}"),
            )
            .with_source(e)
        })?;

        let records = rows
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, row)| match serde_json::from_value::<CatalogRecord>(row) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(catalog.index = index, error = %e, "Skipping malformed catalog record");
                        None
                    }
                },
            )
            .collect();

        Ok(Self::from_records(records))
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse
    pub fn try_load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCode::ResourceUnavailable,
                format!("Failed to read catalog file {}: {e}", path.display()),
            )
            .with_source(e)
        })?;

        Self::from_json_str(&content)
    }

    /// Load a catalog file, falling back to an empty catalog on any failure
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => {
                info!(
                    catalog.path = %path.display(),
                    catalog.entries = catalog.len(),
                    "Loaded fallback nutrition catalog"
                );
                catalog
            }
            Err(e) => {
                warn!(
                    catalog.path = %path.display(),
                    error = %e,
                    "Fallback nutrition catalog unavailable, continuing with an empty catalog"
                );
                Self::empty()
            }
        }
    }

    /// Entries in declaration order
    #[must_use]
    pub fn entries(&self) -> &[FoodCatalogEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a query against this catalog
    #[must_use]
    pub fn find(&self, query: &str) -> Option<CatalogMatch<'_>> {
        find_match(&self.entries, query)
    }
}

impl From<Vec<FoodCatalogEntry>> for FoodCatalog {
    fn from(entries: Vec<FoodCatalogEntry>) -> Self {
        Self { entries }
    }
}

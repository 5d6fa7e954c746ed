// ABOUTME: Nutrition estimation models for catalog lookups and remote API results
// ABOUTME: CatalogRecord, FoodCatalogEntry, EstimateSource, and NutritionEstimate definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::{
    REMOTE_PROVIDER_NAME, SOURCE_LOCAL, SOURCE_LOCAL_DB, SOURCE_REMOTE_API,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Where an estimate came from, surfaced to callers for attribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstimateSource {
    /// Remote nutrition API
    #[serde(rename = "remote-api")]
    RemoteApi,
    /// Curated fallback catalog
    #[default]
    #[serde(rename = "local-db")]
    LocalDb,
    /// Built-in food list
    #[serde(rename = "local")]
    Local,
}

impl EstimateSource {
    /// Wire tag for this source
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RemoteApi => SOURCE_REMOTE_API,
            Self::LocalDb => SOURCE_LOCAL_DB,
            Self::Local => SOURCE_LOCAL,
        }
    }

    /// Parse a provenance tag as written in the catalog dataset
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            SOURCE_REMOTE_API => Some(Self::RemoteApi),
            SOURCE_LOCAL_DB => Some(Self::LocalDb),
            SOURCE_LOCAL => Some(Self::Local),
            _ => None,
        }
    }

    /// Human-readable attribution shown next to an estimate
    #[must_use]
    pub const fn attribution_label(self) -> &'static str {
        match self {
            Self::RemoteApi => REMOTE_PROVIDER_NAME,
            Self::LocalDb => "local nutrition guide",
            Self::Local => "built-in list",
        }
    }
}

impl fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accept `null` wherever a keyword list is optional
fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One record of the fallback dataset, as written on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Display name
    pub name: String,
    /// Calories per serving
    pub calories_per_serving: f64,
    /// Serving size in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size_grams: Option<f64>,
    /// Aliases the food is known by
    #[serde(
        default,
        deserialize_with = "deserialize_keywords",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub keywords: Vec<String>,
    /// Provenance tag; defaults to `local-db`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl CatalogRecord {
    /// Create a record with only the required fields
    pub fn new(name: impl Into<String>, calories_per_serving: f64) -> Self {
        Self {
            name: name.into(),
            calories_per_serving,
            serving_size_grams: None,
            keywords: Vec::new(),
            source: None,
        }
    }

    /// Attach aliases
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a serving size in grams
    #[must_use]
    pub fn with_serving_size(mut self, grams: f64) -> Self {
        self.serving_size_grams = Some(grams);
        self
    }

    /// Attach an explicit provenance tag
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Reasons a dataset record is rejected during catalog load
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidCatalogRecord {
    /// Name is empty or whitespace
    #[error("record has a blank name")]
    BlankName,
    /// Calories are negative or not a finite number
    #[error("record '{name}' has invalid calories {value}")]
    InvalidCalories {
        /// Offending record name
        name: String,
        /// Offending value
        value: f64,
    },
    /// Serving size is negative or not a finite number
    #[error("record '{name}' has invalid serving size {value}")]
    InvalidServingSize {
        /// Offending record name
        name: String,
        /// Offending value
        value: f64,
    },
}

/// A catalog food, normalized for case-insensitive matching
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCatalogEntry {
    /// Canonical display name
    pub name: String,
    /// Lowercased `name`
    pub name_lower: String,
    /// Lowercased, non-blank aliases in dataset order
    pub keywords: Vec<String>,
    /// Calories per serving (non-negative)
    pub calories_per_serving: f64,
    /// Serving size in grams (non-negative) when known
    pub serving_size_grams: Option<f64>,
    /// Provenance tag
    pub source: EstimateSource,
}

impl FoodCatalogEntry {
    /// Validate and normalize a dataset record
    ///
    /// Unknown provenance tags fall back to [`EstimateSource::LocalDb`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCatalogRecord`] when the name is blank or a numeric
    /// field is negative or not finite.
    pub fn from_record(record: CatalogRecord) -> Result<Self, InvalidCatalogRecord> {
        if record.name.trim().is_empty() {
            return Err(InvalidCatalogRecord::BlankName);
        }

        let calories = record.calories_per_serving;
        if !calories.is_finite() || calories < 0.0 {
            return Err(InvalidCatalogRecord::InvalidCalories {
                name: record.name,
                value: calories,
            });
        }

        if let Some(grams) = record.serving_size_grams {
            if !grams.is_finite() || grams < 0.0 {
                return Err(InvalidCatalogRecord::InvalidServingSize {
                    name: record.name,
                    value: grams,
                });
            }
        }

        let source = record
            .source
            .as_deref()
            .and_then(EstimateSource::from_tag)
            .unwrap_or_default();

        let keywords = record
            .keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        Ok(Self {
            name_lower: record.name.trim().to_lowercase(),
            name: record.name,
            keywords,
            calories_per_serving: calories,
            serving_size_grams: record.serving_size_grams,
            source,
        })
    }
}

/// Unified nutrition estimate returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEstimate {
    /// Resolved food name
    pub name: String,
    /// Calories per serving
    pub calories_per_serving: f64,
    /// Serving size in grams, `null` when unknown
    pub serving_size_grams: Option<f64>,
    /// Provenance tag
    pub source: EstimateSource,
}

impl From<&FoodCatalogEntry> for NutritionEstimate {
    fn from(entry: &FoodCatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            calories_per_serving: entry.calories_per_serving,
            serving_size_grams: entry.serving_size_grams,
            source: entry.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_normalizes_name_and_keywords() {
        let record = CatalogRecord::new("Peanut Butter (2 tbsp)", 188.0)
            .with_keywords(["PB", "  Peanut Spread ", ""])
            .with_serving_size(32.0);

        let entry = FoodCatalogEntry::from_record(record).unwrap();

        assert_eq!(entry.name, "Peanut Butter (2 tbsp)");
        assert_eq!(entry.name_lower, "peanut butter (2 tbsp)");
        assert_eq!(entry.keywords, vec!["pb", "peanut spread"]);
        assert_eq!(entry.source, EstimateSource::LocalDb);
        assert_eq!(entry.serving_size_grams, Some(32.0));
    }

    #[test]
    fn test_entry_keeps_known_source_and_defaults_unknown() {
        let local = FoodCatalogEntry::from_record(
            CatalogRecord::new("Toast", 80.0).with_source("local"),
        )
        .unwrap();
        assert_eq!(local.source, EstimateSource::Local);

        let unknown = FoodCatalogEntry::from_record(
            CatalogRecord::new("Toast", 80.0).with_source("grandma"),
        )
        .unwrap();
        assert_eq!(unknown.source, EstimateSource::LocalDb);
    }

    #[test]
    fn test_entry_rejects_invalid_numbers() {
        assert_eq!(
            FoodCatalogEntry::from_record(CatalogRecord::new("  ", 10.0)),
            Err(InvalidCatalogRecord::BlankName)
        );
        assert!(matches!(
            FoodCatalogEntry::from_record(CatalogRecord::new("Ice", -1.0)),
            Err(InvalidCatalogRecord::InvalidCalories { .. })
        ));
        assert!(matches!(
            FoodCatalogEntry::from_record(CatalogRecord::new("Ice", 1.0).with_serving_size(f64::NAN)),
            Err(InvalidCatalogRecord::InvalidServingSize { .. })
        ));
    }

    #[test]
    fn test_estimate_serializes_camel_case_with_null_serving() {
        let estimate = NutritionEstimate {
            name: "Apple (1 medium)".to_owned(),
            calories_per_serving: 95.0,
            serving_size_grams: None,
            source: EstimateSource::LocalDb,
        };

        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Apple (1 medium)",
                "caloriesPerServing": 95.0,
                "servingSizeGrams": null,
                "source": "local-db"
            })
        );
    }

    #[test]
    fn test_attribution_labels() {
        assert_eq!(EstimateSource::RemoteApi.attribution_label(), "CalorieNinjas");
        assert_eq!(EstimateSource::LocalDb.attribution_label(), "local nutrition guide");
        assert_eq!(EstimateSource::Local.attribution_label(), "built-in list");
    }

    #[test]
    fn test_record_accepts_null_or_missing_keywords() {
        let null_keywords: CatalogRecord = serde_json::from_str(
            r#"{"name": "Banana (1 medium)", "caloriesPerServing": 105, "keywords": null}"#,
        )
        .unwrap();
        assert!(null_keywords.keywords.is_empty());

        let missing: CatalogRecord =
            serde_json::from_str(r#"{"name": "Toast", "caloriesPerServing": 80}"#).unwrap();
        assert!(missing.keywords.is_empty());
    }
}

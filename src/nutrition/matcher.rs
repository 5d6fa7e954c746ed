// ABOUTME: Three-tier fuzzy matcher resolving food queries against the fallback catalog
// ABOUTME: Exact name/keyword, bidirectional substring, then token-overlap scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog matching
//!
//! Tiers are tried in order and the first tier producing a candidate wins:
//!
//! 1. **Exact**: `name_lower` equals the query, or a keyword equals it.
//! 2. **Substring**: the name or any keyword contains the query, or is
//!    contained in it.
//! 3. **Token overlap**: each whitespace-separated query token scores +2 when
//!    found in the name and +1 when found in any keyword; the strictly
//!    highest total wins.
//!
//! Within every tier, catalog order breaks ties.

use crate::models::FoodCatalogEntry;

/// Points for a query token found inside the entry name
const NAME_TOKEN_SCORE: u32 = 2;

/// Points for a query token found inside any keyword
const KEYWORD_TOKEN_SCORE: u32 = 1;

/// Which tier resolved a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Name or keyword equals the query
    Exact,
    /// Name or keyword contains, or is contained in, the query
    Substring,
    /// Highest token-overlap score
    TokenOverlap {
        /// Winning score (always positive)
        score: u32,
    },
}

impl MatchTier {
    /// Short label for structured logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Substring => "substring",
            Self::TokenOverlap { .. } => "token_overlap",
        }
    }
}

/// A catalog entry selected for a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogMatch<'a> {
    /// Winning entry
    pub entry: &'a FoodCatalogEntry,
    /// Tier that produced it
    pub tier: MatchTier,
}

/// Trim and lowercase a raw query
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolve a query against catalog entries
///
/// The query is normalized first, so callers may pass raw input. Returns
/// `None` for a blank query or when no tier finds a candidate.
#[must_use]
pub fn find_match<'a>(entries: &'a [FoodCatalogEntry], query: &str) -> Option<CatalogMatch<'a>> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return None;
    }

    if let Some(entry) = exact_match(entries, &needle) {
        return Some(CatalogMatch {
            entry,
            tier: MatchTier::Exact,
        });
    }

    if let Some(entry) = substring_match(entries, &needle) {
        return Some(CatalogMatch {
            entry,
            tier: MatchTier::Substring,
        });
    }

    token_overlap_match(entries, &needle).map(|(entry, score)| CatalogMatch {
        entry,
        tier: MatchTier::TokenOverlap { score },
    })
}

fn exact_match<'a>(entries: &'a [FoodCatalogEntry], needle: &str) -> Option<&'a FoodCatalogEntry> {
    entries.iter().find(|entry| {
        entry.name_lower == needle || entry.keywords.iter().any(|keyword| keyword == needle)
    })
}

fn substring_match<'a>(
    entries: &'a [FoodCatalogEntry],
    needle: &str,
) -> Option<&'a FoodCatalogEntry> {
    entries.iter().find(|entry| {
        overlaps(&entry.name_lower, needle)
            || entry.keywords.iter().any(|keyword| overlaps(keyword, needle))
    })
}

/// Either string contains the other
fn overlaps(candidate: &str, needle: &str) -> bool {
    candidate.contains(needle) || needle.contains(candidate)
}

fn token_overlap_match<'a>(
    entries: &'a [FoodCatalogEntry],
    needle: &str,
) -> Option<(&'a FoodCatalogEntry, u32)> {
    let tokens: Vec<&str> = needle.split_whitespace().collect();

    let mut best: Option<(&FoodCatalogEntry, u32)> = None;
    for entry in entries {
        let score = token_score(entry, &tokens);
        // Strictly greater: earlier entries keep ties.
        if score > best.map_or(0, |(_, best_score)| best_score) {
            best = Some((entry, score));
        }
    }
    best
}

fn token_score(entry: &FoodCatalogEntry, tokens: &[&str]) -> u32 {
    tokens
        .iter()
        .map(|token| {
            let mut score = 0;
            if entry.name_lower.contains(token) {
                score += NAME_TOKEN_SCORE;
            }
            if entry.keywords.iter().any(|keyword| keyword.contains(token)) {
                score += KEYWORD_TOKEN_SCORE;
            }
            score
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogRecord;

    fn entry(name: &str, keywords: &[&str]) -> FoodCatalogEntry {
        FoodCatalogEntry::from_record(
            CatalogRecord::new(name, 100.0).with_keywords(keywords.iter().copied()),
        )
        .unwrap()
    }

    fn catalog() -> Vec<FoodCatalogEntry> {
        vec![
            entry("Apple (1 medium)", &["apple", "red apple"]),
            entry("Banana (1 medium)", &["banana"]),
            entry("Chicken breast, cooked (100g)", &["chicken", "grilled chicken"]),
            entry("Rice, cooked (1 cup)", &["rice", "white rice"]),
            entry("Peanut butter (2 tbsp)", &["pb", "peanut spread"]),
        ]
    }

    #[test]
    fn test_exact_name_is_case_insensitive() {
        let entries = catalog();
        let found = find_match(&entries, "  BANANA (1 Medium) ").unwrap();
        assert_eq!(found.entry.name, "Banana (1 medium)");
        assert_eq!(found.tier, MatchTier::Exact);
    }

    #[test]
    fn test_exact_keyword() {
        let entries = catalog();
        let found = find_match(&entries, "PB").unwrap();
        assert_eq!(found.entry.name, "Peanut butter (2 tbsp)");
        assert_eq!(found.tier, MatchTier::Exact);
    }

    #[test]
    fn test_exact_beats_earlier_substring() {
        // An exact keyword later in the catalog beats an earlier substring hit.
        let entries = vec![entry("Rice cakes", &[]), entry("Plain rice", &["rice"])];
        let found = find_match(&entries, "rice").unwrap();
        assert_eq!(found.entry.name, "Plain rice");
        assert_eq!(found.tier, MatchTier::Exact);
    }

    #[test]
    fn test_substring_query_inside_name() {
        let entries = vec![entry("Apple (1 medium)", &[])];
        let found = find_match(&entries, "apple").unwrap();
        assert_eq!(found.entry.name, "Apple (1 medium)");
        assert_eq!(found.tier, MatchTier::Substring);
    }

    #[test]
    fn test_substring_name_inside_query() {
        let entries = vec![entry("Tofu", &[])];
        let found = find_match(&entries, "fried tofu bowl").unwrap();
        assert_eq!(found.entry.name, "Tofu");
        assert_eq!(found.tier, MatchTier::Substring);
    }

    #[test]
    fn test_substring_keyword_inside_query() {
        let entries = catalog();
        let found = find_match(&entries, "two scoops of peanut spread please").unwrap();
        assert_eq!(found.entry.name, "Peanut butter (2 tbsp)");
        assert_eq!(found.tier, MatchTier::Substring);
    }

    #[test]
    fn test_substring_first_in_catalog_order() {
        let entries = catalog();
        // "an" occurs in both "banana" and "peanut"; banana is declared first.
        let found = find_match(&entries, "an").unwrap();
        assert_eq!(found.entry.name, "Banana (1 medium)");
    }

    #[test]
    fn test_token_overlap_highest_score() {
        let entries = vec![
            entry("Rice, cooked (1 cup)", &["white rice"]),
            entry("Chicken breast, cooked (100g)", &["poultry", "chicken breast"]),
        ];
        let found = find_match(&entries, "cooked chicken wrap").unwrap();
        // chicken breast: cooked +2, chicken +2 +1; rice: cooked +2
        assert_eq!(found.entry.name, "Chicken breast, cooked (100g)");
        assert_eq!(found.tier, MatchTier::TokenOverlap { score: 5 });
    }

    #[test]
    fn test_token_overlap_tie_keeps_catalog_order() {
        let entries = vec![
            entry("Oatmeal, cooked (1 cup)", &[]),
            entry("Pasta, cooked (1 cup)", &[]),
        ];
        let found = find_match(&entries, "slow cooked stew").unwrap();
        assert_eq!(found.entry.name, "Oatmeal, cooked (1 cup)");
        assert_eq!(found.tier, MatchTier::TokenOverlap { score: 2 });
    }

    #[test]
    fn test_keyword_only_token_scores_one() {
        let entries = vec![entry("Yogurt, plain (1 cup)", &["greek yogurt", "lemon curd dip"])];
        let found = find_match(&entries, "curd tart").unwrap();
        assert_eq!(found.tier, MatchTier::TokenOverlap { score: 1 });
    }

    #[test]
    fn test_no_shared_tokens_is_none() {
        let entries = catalog();
        assert!(find_match(&entries, "xyz-nonexistent-food").is_none());
        assert!(find_match(&entries, "quinoa kale").is_none());
    }

    #[test]
    fn test_blank_query_and_empty_catalog() {
        let entries = catalog();
        assert!(find_match(&entries, "   ").is_none());
        assert!(find_match(&[], "apple").is_none());
    }
}

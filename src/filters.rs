// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Local searches over already-fetched collections. No network access.

use regex::Regex;

use crate::error::{Error, Result};
use crate::models::{Category, Transaction};

/// Case-insensitive substring search, or an unanchored regex search.
enum NameMatcher {
    Substring(String),
    Pattern(Regex),
}

impl NameMatcher {
    fn new(query: &str, use_regex: bool) -> Result<Self> {
        if use_regex {
            Regex::new(query)
                .map(NameMatcher::Pattern)
                .map_err(|err| Error::validation(format!("Invalid regex pattern '{}': {}", query, err)))
        } else {
            Ok(NameMatcher::Substring(query.to_lowercase()))
        }
    }

    fn is_match(&self, hay: &str) -> bool {
        match self {
            NameMatcher::Substring(needle) => hay.to_lowercase().contains(needle.as_str()),
            NameMatcher::Pattern(re) => re.is_match(hay),
        }
    }
}

pub fn filter_categories(
    categories: &[Category],
    query: &str,
    use_regex: bool,
) -> Result<Vec<Category>> {
    let matcher = NameMatcher::new(query, use_regex)?;
    Ok(categories
        .iter()
        .filter(|c| matcher.is_match(&c.name))
        .cloned()
        .collect())
}

/// Keeps transactions that satisfy every given criterion.
///
/// `title` is matched against the description; an empty title is no constraint.
pub fn filter_transactions(
    transactions: &[Transaction],
    account_id: Option<i64>,
    title: Option<&str>,
    use_regex: bool,
) -> Result<Vec<Transaction>> {
    let matcher = match title.filter(|t| !t.is_empty()) {
        Some(t) => Some(NameMatcher::new(t, use_regex)?),
        None => None,
    };
    Ok(transactions
        .iter()
        .filter(|tx| account_id.is_none_or(|id| tx.account_id == Some(id)))
        .filter(|tx| matcher.as_ref().is_none_or(|m| m.is_match(&tx.description)))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_folds_case_on_both_sides() {
        let m = NameMatcher::new("FOOD", false).unwrap();
        assert!(m.is_match("fast food"));
        assert!(!m.is_match("Transport"));
    }

    #[test]
    fn regex_is_unanchored() {
        let m = NameMatcher::new("^Fa|od$", true).unwrap();
        assert!(m.is_match("Fast Food"));
        assert!(!m.is_match("food court"));
    }
}

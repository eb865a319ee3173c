// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Outcome of a single strategy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Found(String),
    NotFound,
}

impl From<Option<String>> for SearchResult {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => SearchResult::Found(url),
            _ => SearchResult::NotFound,
        }
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use crate::engines::traits::{EngineError, HttpClient};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(#[from] EngineError),
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Blocked by anti-bot protection")]
    Blocked,
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Parse(e.to_string())
    }
}

/// One independent way of discovering a candidate image URL for a product.
///
/// Implementations only write `search`; the pipeline calls `attempt`, which
/// never fails: every `SearchError` is logged here and becomes `NotFound`.
#[async_trait]
pub trait ImageSearchStrategy: Send + Sync {
    /// Look up a candidate image URL for an already-normalized product name.
    async fn search(
        &self,
        name: &str,
        http: &dyn HttpClient,
    ) -> Result<Option<String>, SearchError>;

    /// Source identifier written to the output record.
    fn name(&self) -> &'static str;

    /// Human-readable label for log messages.
    fn label(&self) -> &'static str {
        self.name()
    }

    async fn attempt(&self, name: &str, http: &dyn HttpClient) -> SearchResult {
        if name.trim().is_empty() {
            return SearchResult::NotFound;
        }

        match self.search(name, http).await {
            Ok(candidate) => SearchResult::from(candidate),
            Err(SearchError::HttpStatus(status)) => {
                debug!(
                    strategy = self.label(),
                    status,
                    "{} returned non-success status for {}",
                    self.label(),
                    name
                );
                SearchResult::NotFound
            }
            Err(e) => {
                warn!(
                    strategy = self.label(),
                    "{} search failed for {}: {}",
                    self.label(),
                    name,
                    e
                );
                SearchResult::NotFound
            }
        }
    }
}

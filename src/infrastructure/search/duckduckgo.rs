// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_record::SOURCE_DUCKDUCKGO;
use crate::domain::search::engine::{ImageSearchStrategy, SearchError};
use crate::engines::traits::{HttpClient, HttpRequest, DEFAULT_REQUEST_TIMEOUT};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

static VQD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"vqd=["']([^"']+)["']"#).expect("valid vqd regex"));

/// Only the first few entries of the JSON result list are considered.
const MAX_RESULTS_CHECKED: usize = 3;

#[derive(Debug, Deserialize)]
struct ImageSearchResponse {
    #[serde(default)]
    results: Vec<ImageSearchEntry>,
}

#[derive(Debug, Deserialize)]
struct ImageSearchEntry {
    image: Option<String>,
}

/// DuckDuckGo 图片搜索
///
/// 先请求搜索页获取短期有效的 `vqd` 令牌，再调用 `i.js` JSON 接口取图片结果
pub struct DuckDuckGoStrategy {
    base_url: String,
    timeout: Duration,
}

impl Default for DuckDuckGoStrategy {
    fn default() -> Self {
        Self::new("https://duckduckgo.com", DEFAULT_REQUEST_TIMEOUT)
    }
}

impl DuckDuckGoStrategy {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Extract the session token embedded in the search page.
    pub fn extract_token(html: &str) -> Option<String> {
        VQD_REGEX
            .captures(html)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// First non-empty `image` among the leading JSON results.
    pub fn parse_image_results(body: &str) -> Result<Option<String>, SearchError> {
        let response: ImageSearchResponse = serde_json::from_str(body)?;
        Ok(response
            .results
            .into_iter()
            .take(MAX_RESULTS_CHECKED)
            .filter_map(|entry| entry.image)
            .find(|image| !image.trim().is_empty()))
    }
}

#[async_trait]
impl ImageSearchStrategy for DuckDuckGoStrategy {
    async fn search(
        &self,
        name: &str,
        http: &dyn HttpClient,
    ) -> Result<Option<String>, SearchError> {
        let page_request = HttpRequest::new(format!("{}/", self.base_url))
            .query("q", name)
            .query("iax", "images")
            .query("ia", "images")
            .timeout(self.timeout);

        let page = http.get(&page_request).await?;
        if !page.is_success() {
            return Err(SearchError::HttpStatus(page.status_code));
        }

        let Some(token) = Self::extract_token(&page.body) else {
            debug!("No vqd token in DuckDuckGo page for {}", name);
            return Ok(None);
        };

        let images_request = HttpRequest::new(format!("{}/i.js", self.base_url))
            .query("l", "us-en")
            .query("o", "json")
            .query("q", name)
            .query("vqd", token)
            .query("f", ",,,")
            .query("p", "1")
            .query("v7exp", "a")
            .header("Referer", format!("{}/", self.base_url))
            .timeout(self.timeout);

        let response = http.get(&images_request).await?;
        if !response.is_success() {
            return Err(SearchError::HttpStatus(response.status_code));
        }

        Self::parse_image_results(&response.body)
    }

    fn name(&self) -> &'static str {
        SOURCE_DUCKDUCKGO
    }

    fn label(&self) -> &'static str {
        "DuckDuckGo"
    }
}

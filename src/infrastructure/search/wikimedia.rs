// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_record::SOURCE_DIRECT_SEARCH;
use crate::domain::search::engine::{ImageSearchStrategy, SearchError};
use crate::engines::traits::{HttpClient, HttpRequest};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// MediaWiki namespace holding file pages.
const FILE_NAMESPACE: &str = "6";
const SEARCH_LIMIT: &str = "3";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    query: Option<ApiQuery>,
}

#[derive(Debug, Deserialize)]
struct ApiQuery {
    #[serde(default)]
    search: Vec<ApiSearchHit>,
}

#[derive(Debug, Deserialize)]
struct ApiSearchHit {
    title: String,
}

/// Wikimedia Commons 文件搜索
///
/// 通过 MediaWiki 搜索接口查找文件页，并由首个结果的标题拼出 `Special:FilePath` 地址
pub struct WikimediaStrategy {
    base_url: String,
    timeout: Duration,
}

impl Default for WikimediaStrategy {
    fn default() -> Self {
        Self::new("https://commons.wikimedia.org", Duration::from_secs(10))
    }
}

impl WikimediaStrategy {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Canonical file URL for a search hit title such as `File:Red mug.jpg`.
    pub fn file_path_url(&self, title: &str) -> String {
        let file_name = title.strip_prefix("File:").unwrap_or(title).replace(' ', "_");
        format!(
            "{}/wiki/Special:FilePath/{}",
            self.base_url,
            urlencoding::encode(&file_name)
        )
    }

    pub fn parse_search_response(&self, body: &str) -> Result<Option<String>, SearchError> {
        let response: ApiResponse = serde_json::from_str(body)?;
        Ok(response
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| self.file_path_url(&hit.title)))
    }
}

#[async_trait]
impl ImageSearchStrategy for WikimediaStrategy {
    async fn search(
        &self,
        name: &str,
        http: &dyn HttpClient,
    ) -> Result<Option<String>, SearchError> {
        let request = HttpRequest::new(format!("{}/w/api.php", self.base_url))
            .query("action", "query")
            .query("format", "json")
            .query("list", "search")
            .query("srsearch", name)
            .query("srnamespace", FILE_NAMESPACE)
            .query("srlimit", SEARCH_LIMIT)
            .timeout(self.timeout);

        let response = http.get(&request).await?;
        if !response.is_success() {
            return Err(SearchError::HttpStatus(response.status_code));
        }
        self.parse_search_response(&response.body)
    }

    fn name(&self) -> &'static str {
        SOURCE_DIRECT_SEARCH
    }

    fn label(&self) -> &'static str {
        "Direct Search"
    }
}

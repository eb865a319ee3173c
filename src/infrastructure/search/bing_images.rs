// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_record::SOURCE_BING_IMAGES;
use crate::domain::search::engine::{ImageSearchStrategy, SearchError};
use crate::engines::traits::{HttpClient, HttpRequest, DEFAULT_REQUEST_TIMEOUT};
use crate::utils::url_utils::{has_image_extension, is_absolute_http, is_hosted_on};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::Deserialize;
use std::time::Duration;

static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img[src]").expect("valid img selector"));
static MEDIA_ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.m").expect("valid media anchor selector"));

const SHOPPING_KEYWORDS: &str = "product buy shopping";
const MAX_MEDIA_ANCHORS: usize = 3;

/// JSON carried in the `m` attribute of Bing result anchors.
#[derive(Debug, Deserialize)]
struct MediaMetadata {
    murl: Option<String>,
}

/// Bing Images scraping strategy
///
/// Looks for inline `<img>` results first, then falls back to the media URL
/// (`murl`) embedded in the `m` attribute of result anchors.
pub struct BingImagesStrategy {
    base_url: String,
    timeout: Duration,
}

impl Default for BingImagesStrategy {
    fn default() -> Self {
        Self::new("https://www.bing.com", DEFAULT_REQUEST_TIMEOUT)
    }
}

impl BingImagesStrategy {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Build the image search request for a product name
    pub fn build_request(&self, name: &str) -> HttpRequest {
        HttpRequest::new(format!("{}/images/search", self.base_url))
            .query("q", format!("{} {}", name, SHOPPING_KEYWORDS))
            .query("form", "HDRSC2")
            .query("first", "1")
            .query("tsc", "ImageHoverTitle")
            .timeout(self.timeout)
    }

    /// Parse a Bing Images result page
    ///
    /// # Returns
    /// The first off-site absolute image `src`, otherwise the first `murl`
    /// found in the leading media anchors.
    pub fn parse_results(html: &str) -> Result<Option<String>, SearchError> {
        if html.contains("<title>Robot Check</title>") {
            return Err(SearchError::Blocked);
        }

        let document = Html::parse_document(html);

        let inline = document
            .select(&IMG_SELECTOR)
            .filter_map(|img| img.value().attr("src"))
            .find(|src| {
                has_image_extension(src) && is_absolute_http(src) && !is_hosted_on(src, "bing.com")
            });
        if let Some(src) = inline {
            return Ok(Some(src.to_string()));
        }

        let media_url = document
            .select(&MEDIA_ANCHOR_SELECTOR)
            .take(MAX_MEDIA_ANCHORS)
            .filter_map(|anchor| anchor.value().attr("m"))
            .filter_map(|m| serde_json::from_str::<MediaMetadata>(m).ok())
            .filter_map(|meta| meta.murl)
            .find(|murl| !murl.trim().is_empty());

        Ok(media_url)
    }
}

#[async_trait]
impl ImageSearchStrategy for BingImagesStrategy {
    async fn search(
        &self,
        name: &str,
        http: &dyn HttpClient,
    ) -> Result<Option<String>, SearchError> {
        let response = http.get(&self.build_request(name)).await?;
        if !response.is_success() {
            return Err(SearchError::HttpStatus(response.status_code));
        }
        Self::parse_results(&response.body)
    }

    fn name(&self) -> &'static str {
        SOURCE_BING_IMAGES
    }

    fn label(&self) -> &'static str {
        "Bing Images"
    }
}

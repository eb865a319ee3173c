// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_record::SOURCE_SHOPPING_SITES;
use crate::domain::search::engine::{ImageSearchStrategy, SearchError};
use crate::engines::traits::{HttpClient, HttpRequest, DEFAULT_REQUEST_TIMEOUT};
use crate::utils::url_utils::{has_image_extension, is_absolute_http};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

const MAX_IMAGES_PER_SITE: usize = 3;

/// 购物网站搜索配置
#[derive(Debug, Clone)]
pub struct ShoppingSite {
    /// 站点名称（仅用于日志）
    pub name: &'static str,
    /// 搜索页地址
    pub search_url: String,
    /// 搜索关键字参数名
    pub query_key: &'static str,
    /// 商品图片的CSS选择器
    pub image_selector: &'static str,
}

impl ShoppingSite {
    pub fn amazon(base_url: &str) -> Self {
        Self {
            name: "Amazon",
            search_url: format!("{}/s", base_url.trim_end_matches('/')),
            query_key: "k",
            image_selector: ".s-image",
        }
    }

    pub fn ebay(base_url: &str) -> Self {
        Self {
            name: "eBay",
            search_url: format!("{}/sch/i.html", base_url.trim_end_matches('/')),
            query_key: "_nkw",
            image_selector: ".s-item__image img",
        }
    }

    /// First qualifying product image among the leading selector matches.
    pub fn find_image(&self, html: &str) -> Result<Option<String>, SearchError> {
        if html.contains("validateCaptcha") || html.contains("<title>Robot Check</title>") {
            return Err(SearchError::Blocked);
        }

        let selector = Selector::parse(self.image_selector).map_err(|e| {
            SearchError::Parse(format!("invalid selector {}: {:?}", self.image_selector, e))
        })?;
        let document = Html::parse_document(html);

        let found = document
            .select(&selector)
            .take(MAX_IMAGES_PER_SITE)
            .filter_map(|img| {
                let value = img.value();
                value
                    .attr("src")
                    .filter(|src| !src.is_empty())
                    .or_else(|| value.attr("data-src"))
            })
            .find(|src| is_product_image(src));

        Ok(found.map(str::to_string))
    }
}

/// Absolute image URL that does not look like a thumbnail.
pub fn is_product_image(src: &str) -> bool {
    is_absolute_http(src)
        && has_image_extension(src)
        && !src.to_lowercase().contains("thumb")
        && !src.contains("50x50")
}

/// Scrapes product images from shopping-site search pages, in site order.
pub struct ShoppingSitesStrategy {
    sites: Vec<ShoppingSite>,
    timeout: Duration,
}

impl Default for ShoppingSitesStrategy {
    fn default() -> Self {
        Self::new(
            vec![
                ShoppingSite::amazon("https://www.amazon.com"),
                ShoppingSite::ebay("https://www.ebay.com"),
            ],
            DEFAULT_REQUEST_TIMEOUT,
        )
    }
}

impl ShoppingSitesStrategy {
    pub fn new(sites: Vec<ShoppingSite>, timeout: Duration) -> Self {
        Self { sites, timeout }
    }

    pub fn sites(&self) -> &[ShoppingSite] {
        &self.sites
    }

    async fn search_site(
        &self,
        site: &ShoppingSite,
        name: &str,
        http: &dyn HttpClient,
    ) -> Result<Option<String>, SearchError> {
        let request = HttpRequest::new(site.search_url.as_str())
            .query(site.query_key, name)
            .timeout(self.timeout);

        let response = http.get(&request).await?;
        if !response.is_success() {
            return Err(SearchError::HttpStatus(response.status_code));
        }
        site.find_image(&response.body)
    }
}

#[async_trait]
impl ImageSearchStrategy for ShoppingSitesStrategy {
    async fn search(
        &self,
        name: &str,
        http: &dyn HttpClient,
    ) -> Result<Option<String>, SearchError> {
        for site in &self.sites {
            // A failing site only moves us on to the next one
            match self.search_site(site, name, http).await {
                Ok(Some(url)) => return Ok(Some(url)),
                Ok(None) => debug!("No product image on {} for {}", site.name, name),
                Err(e) => warn!("Shopping site search failed for {}: {}", site.name, e),
            }
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        SOURCE_SHOPPING_SITES
    }

    fn label(&self) -> &'static str {
        "Shopping Sites"
    }
}

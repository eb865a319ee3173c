// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Source identifier for records resolved through the DuckDuckGo image search.
pub const SOURCE_DUCKDUCKGO: &str = "duckduckgo";
/// Source identifier for records resolved through Bing Images.
pub const SOURCE_BING_IMAGES: &str = "bing_images";
/// Source identifier for records resolved through shopping-site scraping.
pub const SOURCE_SHOPPING_SITES: &str = "shopping_sites";
/// Source identifier for records resolved through the Wikimedia Commons API.
pub const SOURCE_DIRECT_SEARCH: &str = "direct_search";
/// No strategy produced a usable image.
pub const SOURCE_SMART_PLACEHOLDER: &str = "smart_placeholder";
/// Resolution faulted and was recovered at the pipeline boundary.
pub const SOURCE_ERROR_PLACEHOLDER: &str = "error_placeholder";

/// 单个产品的最终输出记录
///
/// 每个输入产品恰好对应一条记录，`image_url` 永远非空。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRecord {
    #[serde(rename = "product_name")]
    pub name: String,
    pub image_url: String,
    pub source: String,
    pub alt_text: String,
}

impl ImageRecord {
    pub fn new(name: &str, image_url: String, source: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            image_url,
            source: source.into(),
            alt_text: format!("Image of {}", name),
        }
    }

    /// Record produced when resolution itself faulted.
    pub fn error_placeholder(name: &str, image_url: String) -> Self {
        Self {
            name: name.to_string(),
            image_url,
            source: SOURCE_ERROR_PLACEHOLDER.to_string(),
            alt_text: format!("Placeholder for {}", name),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source.contains("placeholder")
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{HttpClient, HttpRequest};
use crate::utils::url_utils::has_image_extension;
use std::time::Duration;
use tracing::debug;

/// Default bound on the HEAD request used for validation.
pub const DEFAULT_VALIDATION_TIMEOUT: Duration = Duration::from_secs(10);

/// 图片URL校验器
///
/// 通过一次 HEAD 请求确认候选URL可访问，并且响应类型或URL本身像是图片
#[derive(Debug, Clone)]
pub struct ImageValidator {
    timeout: Duration,
}

impl Default for ImageValidator {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDATION_TIMEOUT)
    }
}

impl ImageValidator {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Never errors: any transport failure counts as an invalid image.
    pub async fn is_valid_image(&self, url: &str, http: &dyn HttpClient) -> bool {
        let request = HttpRequest::new(url).timeout(self.timeout);
        match http.head(&request).await {
            Ok(response) => {
                let looks_like_image =
                    response.content_type.to_lowercase().contains("image") || has_image_extension(url);
                response.is_success() && looks_like_image
            }
            Err(e) => {
                debug!("Image validation request failed for {}: {}", url, e);
                false
            }
        }
    }
}

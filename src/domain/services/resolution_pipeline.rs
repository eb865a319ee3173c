// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_record::{ImageRecord, SOURCE_SMART_PLACEHOLDER};
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::ImageSearchStrategy;
use crate::domain::services::image_validator::ImageValidator;
use crate::domain::services::name_normalizer::normalize;
use crate::domain::services::placeholder::PlaceholderGenerator;
use crate::engines::traits::HttpClient;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// 图片解析流水线
///
/// 规范化名称后按优先级依次尝试各搜索策略；候选URL必须通过校验，
/// 校验失败则继续下一个策略，全部失败时使用主题占位图。
/// 每次调用 `resolve` 都恰好产出一条记录。
pub struct ResolutionPipeline {
    http: Arc<dyn HttpClient>,
    strategies: Vec<Arc<dyn ImageSearchStrategy>>,
    validator: ImageValidator,
    placeholder: PlaceholderGenerator,
}

impl ResolutionPipeline {
    pub fn new(
        http: Arc<dyn HttpClient>,
        strategies: Vec<Arc<dyn ImageSearchStrategy>>,
        validator: ImageValidator,
        placeholder: PlaceholderGenerator,
    ) -> Self {
        debug!(
            client = http.name(),
            strategies = strategies.len(),
            "Resolution pipeline ready"
        );
        Self {
            http,
            strategies,
            validator,
            placeholder,
        }
    }

    /// Resolve one product into an image record.
    ///
    /// A panic anywhere below this boundary is caught and reported as an
    /// `error_placeholder` record so the batch keeps going.
    pub async fn resolve(&self, raw_name: &str) -> ImageRecord {
        match AssertUnwindSafe(self.try_resolve(raw_name))
            .catch_unwind()
            .await
        {
            Ok(record) => record,
            Err(panic) => {
                error!(
                    "Error processing {}: {}",
                    raw_name,
                    panic_message(panic.as_ref())
                );
                ImageRecord::error_placeholder(raw_name, self.placeholder.generate(raw_name))
            }
        }
    }

    async fn try_resolve(&self, raw_name: &str) -> ImageRecord {
        info!("Searching for: {}", raw_name);
        let normalized = normalize(raw_name);
        let http = self.http.as_ref();

        for strategy in &self.strategies {
            let SearchResult::Found(candidate) = strategy.attempt(&normalized, http).await else {
                continue;
            };

            if self.validator.is_valid_image(&candidate, http).await {
                info!(strategy = strategy.name(), "Found image via {}", strategy.label());
                return ImageRecord::new(raw_name, candidate, strategy.name());
            }
            warn!(
                strategy = strategy.name(),
                "Found URL via {} but validation failed: {}",
                strategy.label(),
                candidate
            );
        }

        info!("Using themed placeholder for {}", raw_name);
        ImageRecord::new(
            raw_name,
            self.placeholder.generate(raw_name),
            SOURCE_SMART_PLACEHOLDER,
        )
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_record::ImageRecord;
use crate::domain::services::resolution_pipeline::ResolutionPipeline;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::info;

/// 请求间随机延迟策略
///
/// 每两个产品之间按 `[min, max]` 均匀采样一次延迟，用于保护上游服务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    min_ms: u64,
    max_ms: u64,
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::from_secs(3.0, 6.0)
    }
}

impl DelayPolicy {
    pub fn new(min: Duration, max: Duration) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min_ms: min.as_millis() as u64,
            max_ms: max.as_millis() as u64,
        }
    }

    /// Negative or non-finite values are treated as zero.
    pub fn from_secs(min_secs: f64, max_secs: f64) -> Self {
        Self::new(to_duration(min_secs), to_duration(max_secs))
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    pub fn sample(&self) -> Duration {
        if self.min_ms == self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::random_range(self.min_ms..=self.max_ms))
    }
}

fn to_duration(secs: f64) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::from_secs_f64(secs)
    } else {
        Duration::ZERO
    }
}

/// 批处理驱动
///
/// 严格顺序地处理产品列表：一个产品完全解析后才开始下一个
pub struct BatchDriver {
    pipeline: ResolutionPipeline,
    delay: DelayPolicy,
}

impl BatchDriver {
    pub fn new(pipeline: ResolutionPipeline, delay: DelayPolicy) -> Self {
        Self { pipeline, delay }
    }

    /// One record per input name, in input order.
    pub async fn run<S: AsRef<str>>(&self, names: &[S]) -> Vec<ImageRecord> {
        let total = names.len();
        info!("Starting to fetch images for {} products", total);

        let mut records = Vec::with_capacity(total);
        for (index, name) in names.iter().enumerate() {
            let name = name.as_ref().trim();
            info!("[{}/{}] {}", index + 1, total, name);
            records.push(self.pipeline.resolve(name).await);

            if index + 1 < total {
                let delay = self.delay.sample();
                if !delay.is_zero() {
                    info!("Waiting {:.1}s...", delay.as_secs_f64());
                    tokio::time::sleep(delay).await;
                }
            }
        }

        records
    }
}

/// 批处理结果统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub real_images: usize,
    pub placeholders: usize,
    /// 按来源统计，键有序
    pub by_source: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn from_records(records: &[ImageRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            if record.is_placeholder() {
                summary.placeholders += 1;
            } else {
                summary.real_images += 1;
            }
            *summary.by_source.entry(record.source.clone()).or_insert(0) += 1;
        }
        summary
    }

    pub fn log(&self) {
        info!("Total products processed: {}", self.total);
        info!("Real images found: {}", self.real_images);
        info!("Placeholders used: {}", self.placeholders);
        for (source, count) in &self.by_source {
            info!("  {}: {}", source, count);
        }
    }
}

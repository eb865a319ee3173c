// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SearchSettings;
use crate::domain::models::image_record::{
    SOURCE_BING_IMAGES, SOURCE_DIRECT_SEARCH, SOURCE_DUCKDUCKGO, SOURCE_SHOPPING_SITES,
};
use crate::domain::search::engine::ImageSearchStrategy;
use crate::infrastructure::search::bing_images::BingImagesStrategy;
use crate::infrastructure::search::duckduckgo::DuckDuckGoStrategy;
use crate::infrastructure::search::shopping::{ShoppingSite, ShoppingSitesStrategy};
use crate::infrastructure::search::wikimedia::WikimediaStrategy;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 搜索策略类型枚举，声明顺序即解析时的优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyType {
    /// DuckDuckGo 图片搜索（令牌方式）
    DuckDuckGo,
    /// Bing 图片搜索（页面抓取）
    BingImages,
    /// 购物网站抓取
    ShoppingSites,
    /// Wikimedia Commons 文件搜索
    DirectSearch,
}

impl StrategyType {
    /// 按优先级排列的全部策略
    pub const ALL: [StrategyType; 4] = [
        StrategyType::DuckDuckGo,
        StrategyType::BingImages,
        StrategyType::ShoppingSites,
        StrategyType::DirectSearch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => SOURCE_DUCKDUCKGO,
            Self::BingImages => SOURCE_BING_IMAGES,
            Self::ShoppingSites => SOURCE_SHOPPING_SITES,
            Self::DirectSearch => SOURCE_DIRECT_SEARCH,
        }
    }
}

/// 搜索策略工厂
pub struct StrategyFactory;

impl StrategyFactory {
    /// 创建单个策略
    ///
    /// Wikimedia 的接口较快，使用校验超时而非搜索超时
    pub fn create(
        kind: StrategyType,
        settings: &SearchSettings,
        request_timeout: Duration,
        api_timeout: Duration,
    ) -> Arc<dyn ImageSearchStrategy> {
        match kind {
            StrategyType::DuckDuckGo => Arc::new(DuckDuckGoStrategy::new(
                &settings.duckduckgo_url,
                request_timeout,
            )),
            StrategyType::BingImages => {
                Arc::new(BingImagesStrategy::new(&settings.bing_url, request_timeout))
            }
            StrategyType::ShoppingSites => Arc::new(ShoppingSitesStrategy::new(
                vec![
                    ShoppingSite::amazon(&settings.amazon_url),
                    ShoppingSite::ebay(&settings.ebay_url),
                ],
                request_timeout,
            )),
            StrategyType::DirectSearch => {
                Arc::new(WikimediaStrategy::new(&settings.wikimedia_url, api_timeout))
            }
        }
    }

    /// 创建按固定优先级排列的默认策略列表
    pub fn default_strategies(
        settings: &SearchSettings,
        request_timeout: Duration,
        api_timeout: Duration,
    ) -> Vec<Arc<dyn ImageSearchStrategy>> {
        let strategies: Vec<_> = StrategyType::ALL
            .iter()
            .map(|kind| Self::create(*kind, settings, request_timeout, api_timeout))
            .collect();
        info!(
            "Initialized {} image search strategies: {}",
            strategies.len(),
            strategies
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        strategies
    }
}

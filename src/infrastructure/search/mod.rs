// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 图片搜索策略模块
///
/// 提供四种相互独立的图片搜索实现：
/// DuckDuckGo、Bing 图片、购物网站（Amazon、eBay）以及 Wikimedia Commons，
/// 以及按优先级创建默认策略列表的工厂
pub mod bing_images;
pub mod duckduckgo;
pub mod factory;
pub mod shopping;
pub mod wikimedia;

pub use factory::{StrategyFactory, StrategyType};

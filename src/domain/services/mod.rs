// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 名称规范化（name_normalizer）：去除尺寸、款式等干扰词
/// - 占位图生成（placeholder）：按主题生成确定性的占位图URL
/// - 图片校验（image_validator）：确认候选URL确实指向图片
/// - 解析流水线（resolution_pipeline）：按优先级依次尝试各搜索策略
/// - 批处理（batch）：逐个处理产品列表并在请求间插入随机延迟
pub mod batch;
pub mod image_validator;
pub mod name_normalizer;
pub mod placeholder;
pub mod resolution_pipeline;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：图片记录与搜索结果
/// - 搜索接口（search）：图片搜索策略的统一契约
/// - 服务（services）：名称规范化、占位图生成、URL校验、解析流水线与批处理
///
/// 领域层不依赖任何具体的HTTP实现，所有网络访问都通过
/// `engines::traits::HttpClient` 注入。
pub mod models;
pub mod search;
pub mod services;

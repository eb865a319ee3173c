// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含与外部系统交互的具体实现：
/// - 搜索（search）：四种图片搜索策略及默认策略列表工厂
/// - 输出（output）：CSV 与 JSON 结果写入
pub mod output;
pub mod search;

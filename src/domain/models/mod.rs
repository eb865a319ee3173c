// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构：
/// - 图片记录（image_record）：每个产品最终输出的一条记录
/// - 搜索结果（search_result）：单个搜索策略的返回值
pub mod image_record;
pub mod search_result;

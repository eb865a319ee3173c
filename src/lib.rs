// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、图片解析流水线和策略接口
pub mod domain;

/// 引擎模块
///
/// 提供HTTP访问能力及其reqwest实现
pub mod engines;

/// 基础设施模块
///
/// 提供外部服务集成，如图片搜索策略和结果输出
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// 浏览器风格的默认 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 配置加载错误
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// 应用程序配置设置
///
/// 包含HTTP、批处理、输出和搜索端点等所有配置项
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// HTTP客户端配置
    #[validate(nested)]
    pub http: HttpSettings,
    /// 批处理配置
    #[validate(nested)]
    pub batch: BatchSettings,
    /// 输出配置
    pub output: OutputSettings,
    /// 搜索端点配置
    pub search: SearchSettings,
}

/// HTTP客户端配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HttpSettings {
    /// User-Agent 请求头
    pub user_agent: String,
    /// Accept 请求头
    pub accept: String,
    /// Accept-Language 请求头
    pub accept_language: String,
    /// 搜索请求超时时间（秒）
    #[validate(range(min = 1, max = 120))]
    pub request_timeout_secs: u64,
    /// 图片校验请求超时时间（秒）
    #[validate(range(min = 1, max = 120))]
    pub validation_timeout_secs: u64,
}

impl HttpSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validation_timeout(&self) -> Duration {
        Duration::from_secs(self.validation_timeout_secs)
    }
}

/// 批处理配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_delay_range"))]
pub struct BatchSettings {
    /// 产品列表文件路径
    pub products_file: String,
    /// 最多处理的产品数量（未设置时处理全部）
    pub limit: Option<usize>,
    /// 请求间最小延迟（秒）
    #[validate(range(min = 0.0))]
    pub min_delay_secs: f64,
    /// 请求间最大延迟（秒）
    #[validate(range(min = 0.0))]
    pub max_delay_secs: f64,
}

fn validate_delay_range(batch: &BatchSettings) -> Result<(), ValidationError> {
    if batch.min_delay_secs > batch.max_delay_secs {
        return Err(ValidationError::new("min_delay_exceeds_max_delay"));
    }
    Ok(())
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// CSV 输出路径
    pub csv_path: String,
    /// JSON 输出路径
    pub json_path: String,
}

/// 搜索端点配置设置
///
/// 默认指向公共服务，测试中可指向本地模拟服务器
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub duckduckgo_url: String,
    pub bing_url: String,
    pub amazon_url: String,
    pub ebay_url: String,
    pub wikimedia_url: String,
    /// 占位图服务地址
    pub placeholder_url: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            duckduckgo_url: "https://duckduckgo.com".to_string(),
            bing_url: "https://www.bing.com".to_string(),
            amazon_url: "https://www.amazon.com".to_string(),
            ebay_url: "https://www.ebay.com".to_string(),
            wikimedia_url: "https://commons.wikimedia.org".to_string(),
            placeholder_url: "https://via.placeholder.com".to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `PRODIMG__` 前缀的环境变量，并在加载后校验取值范围
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(SettingsError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, SettingsError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let search = SearchSettings::default();
        let builder = Config::builder()
            // HTTP defaults
            .set_default("http.user_agent", DEFAULT_USER_AGENT)?
            .set_default(
                "http.accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )?
            .set_default("http.accept_language", "en-US,en;q=0.5")?
            .set_default("http.request_timeout_secs", 15)?
            .set_default("http.validation_timeout_secs", 10)?
            // Batch defaults
            .set_default("batch.products_file", "products.txt")?
            .set_default("batch.min_delay_secs", 3.0)?
            .set_default("batch.max_delay_secs", 6.0)?
            // Output defaults
            .set_default("output.csv_path", "product_images.csv")?
            .set_default("output.json_path", "product_images.json")?
            // Search endpoints
            .set_default("search.duckduckgo_url", search.duckduckgo_url)?
            .set_default("search.bing_url", search.bing_url)?
            .set_default("search.amazon_url", search.amazon_url)?
            .set_default("search.ebay_url", search.ebay_url)?
            .set_default("search.wikimedia_url", search.wikimedia_url)?
            .set_default("search.placeholder_url", search.placeholder_url)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PRODIMG").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// 默认请求超时时间
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
    /// 请求无效（例如URL无法解析）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// HTTP请求
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// 目标URL
    pub url: String,
    /// 查询参数，按顺序追加到URL
    pub query: Vec<(String, String)>,
    /// 附加请求头
    pub headers: HashMap<String, String>,
    /// 超时时间
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.insert(key.to_string(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Value of a query parameter, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP响应
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 内容类型（小写），缺失时为空字符串
    pub content_type: String,
    /// 响应内容；HEAD 请求为空
    pub body: String,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_lowercase();
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// HTTP访问能力
///
/// 搜索策略与URL校验器通过该特质访问网络，便于在测试中替换实现。
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// 执行GET请求
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, EngineError>;

    /// 执行HEAD请求
    async fn head(&self, request: &HttpRequest) -> Result<HttpResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

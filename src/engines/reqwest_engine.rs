// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::engines::traits::{EngineError, HttpClient, HttpRequest, HttpResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::Method;
use std::time::Instant;
use tracing::debug;
use url::Url;

/// 基于reqwest实现的HTTP会话
///
/// 整个批处理共享同一个客户端（连接复用、Cookie、浏览器风格请求头），
/// 初始化后只读。
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    pub fn new(settings: &HttpSettings) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&settings.accept)
                .map_err(|e| EngineError::InvalidRequest(format!("Invalid Accept header: {}", e)))?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&settings.accept_language).map_err(|e| {
                EngineError::InvalidRequest(format!("Invalid Accept-Language header: {}", e))
            })?,
        );
        headers.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .timeout(settings.request_timeout())
            .cookie_store(true)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }

    async fn execute(
        &self,
        method: Method,
        request: &HttpRequest,
    ) -> Result<HttpResponse, EngineError> {
        // Reject malformed URLs up front so they surface as a typed error
        let url = Url::parse(&request.url)
            .map_err(|e| EngineError::InvalidRequest(format!("{}: {}", request.url, e)))?;

        let mut headers = HeaderMap::new();
        for (k, v) in &request.headers {
            match (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => debug!(
                    header = %k,
                    url = %request.url,
                    "Skipping unparseable request header"
                ),
            }
        }

        let start = Instant::now();
        let is_head = method == Method::HEAD;
        let response = self
            .client
            .request(method, url)
            .query(&request.query)
            .headers(headers)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EngineError::Timeout(request.timeout)
                } else {
                    EngineError::RequestFailed(e)
                }
            })?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let body = if is_head {
            String::new()
        } else {
            response.text().await.map_err(|e| {
                if e.is_timeout() {
                    EngineError::Timeout(request.timeout)
                } else {
                    EngineError::RequestFailed(e)
                }
            })?
        };

        debug!(
            url = %request.url,
            status = status_code,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "HTTP request completed"
        );

        Ok(HttpResponse {
            status_code,
            content_type,
            body,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestEngine {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, EngineError> {
        self.execute(Method::GET, request).await
    }

    async fn head(&self, request: &HttpRequest) -> Result<HttpResponse, EngineError> {
        self.execute(Method::HEAD, request).await
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;

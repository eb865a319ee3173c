// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::pipeline_with_settings;
use prodimg::config::settings::{HttpSettings, SearchSettings, DEFAULT_USER_AGENT};
use prodimg::domain::models::image_record::{SOURCE_BING_IMAGES, SOURCE_DUCKDUCKGO};
use prodimg::domain::models::search_result::SearchResult;
use prodimg::domain::search::engine::{ImageSearchStrategy, SearchError};
use prodimg::engines::reqwest_engine::ReqwestEngine;
use prodimg::infrastructure::search::bing_images::BingImagesStrategy;
use prodimg::infrastructure::search::duckduckgo::DuckDuckGoStrategy;
use prodimg::infrastructure::search::shopping::{ShoppingSite, ShoppingSitesStrategy};
use prodimg::infrastructure::search::wikimedia::WikimediaStrategy;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn engine() -> ReqwestEngine {
    ReqwestEngine::new(&HttpSettings {
        user_agent: DEFAULT_USER_AGENT.to_string(),
        accept: "text/html,*/*;q=0.8".to_string(),
        accept_language: "en-US,en;q=0.5".to_string(),
        request_timeout_secs: 5,
        validation_timeout_secs: 5,
    })
    .unwrap()
}

fn local_settings(uri: &str) -> SearchSettings {
    SearchSettings {
        duckduckgo_url: uri.to_string(),
        bing_url: uri.to_string(),
        amazon_url: uri.to_string(),
        ebay_url: uri.to_string(),
        wikimedia_url: uri.to_string(),
        placeholder_url: "https://via.placeholder.com".to_string(),
    }
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

async fn mount_duckduckgo(server: &MockServer, query: &str, image_url: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", query))
        .and(query_param("iax", "images"))
        .respond_with(html(
            r#"<script>DDG.deep.initialize('/d.js?vqd="4-abc123"');</script>"#.to_string(),
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/i.js"))
        .and(query_param("vqd", "4-abc123"))
        .and(query_param("q", query))
        .and(query_param("o", "json"))
        .and(header("referer", format!("{}/", server.uri()).as_str()))
        .respond_with(json(&format!(
            r#"{{"results":[{{"image":""}},{{"image":"{}","title":"mug"}}]}}"#,
            image_url
        )))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_duckduckgo_token_flow() {
    let server = MockServer::start().await;
    let image_url = format!("{}/images/mug.jpg", server.uri());
    mount_duckduckgo(&server, "Coffee Mug", &image_url).await;

    let strategy = DuckDuckGoStrategy::new(&server.uri(), Duration::from_secs(5));
    let found = strategy.search("Coffee Mug", &engine()).await.unwrap();

    assert_eq!(found, Some(image_url));
}

#[tokio::test]
async fn test_duckduckgo_without_token_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<html><body>nothing</body></html>".to_string()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/i.js"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let strategy = DuckDuckGoStrategy::new(&server.uri(), Duration::from_secs(5));
    let found = strategy.search("Coffee Mug", &engine()).await.unwrap();

    assert_eq!(found, None);
}

#[tokio::test]
async fn test_bing_images_adds_shopping_keywords() {
    let server = MockServer::start().await;
    let image_url = format!("{}/cdn/jar.png", server.uri());
    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("q", "Kitchen Jar product buy shopping"))
        .and(query_param("form", "HDRSC2"))
        .respond_with(html(format!(
            r#"<html><body>
                <img src="/rp/logo.png">
                <img src="https://th.bing.com/th/id/OIP.abc.jpg">
                <img src="{}">
            </body></html>"#,
            image_url
        )))
        .mount(&server)
        .await;

    let strategy = BingImagesStrategy::new(&server.uri(), Duration::from_secs(5));
    let found = strategy.search("Kitchen Jar", &engine()).await.unwrap();

    assert_eq!(found, Some(image_url));
}

#[tokio::test]
async fn test_bing_robot_check_is_blocked_and_attempt_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images/search"))
        .respond_with(html(
            "<html><head><title>Robot Check</title></head></html>".to_string(),
        ))
        .mount(&server)
        .await;

    let strategy = BingImagesStrategy::new(&server.uri(), Duration::from_secs(5));
    let http = engine();

    let result = strategy.search("Kitchen Jar", &http).await;
    assert!(matches!(result, Err(SearchError::Blocked)));
    assert_eq!(
        strategy.attempt("Kitchen Jar", &http).await,
        SearchResult::NotFound
    );
}

#[tokio::test]
async fn test_shopping_sites_fall_back_to_ebay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s"))
        .and(query_param("k", "Tea Tin"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let image_url = format!("{}/img/teatin.jpg", server.uri());
    Mock::given(method("GET"))
        .and(path("/sch/i.html"))
        .and(query_param("_nkw", "Tea Tin"))
        .respond_with(html(format!(
            r#"<html><body>
                <div class="s-item__image"><img src="{uri}/thumbs/teatin.jpg"></div>
                <div class="s-item__image"><img src="" data-src="{img}"></div>
            </body></html>"#,
            uri = server.uri(),
            img = image_url
        )))
        .expect(1)
        .mount(&server)
        .await;

    let strategy = ShoppingSitesStrategy::new(
        vec![
            ShoppingSite::amazon(&server.uri()),
            ShoppingSite::ebay(&server.uri()),
        ],
        Duration::from_secs(5),
    );
    let found = strategy.search("Tea Tin", &engine()).await.unwrap();

    assert_eq!(found, Some(image_url));
}

#[tokio::test]
async fn test_wikimedia_builds_file_path_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "query"))
        .and(query_param("list", "search"))
        .and(query_param("srsearch", "Kitchen Jar"))
        .and(query_param("srnamespace", "6"))
        .and(query_param("srlimit", "3"))
        .respond_with(json(
            r#"{"batchcomplete":"","query":{"search":[{"ns":6,"title":"File:Kitchen jar (blue).jpg"}]}}"#,
        ))
        .mount(&server)
        .await;

    let strategy = WikimediaStrategy::new(&server.uri(), Duration::from_secs(5));
    let found = strategy.search("Kitchen Jar", &engine()).await.unwrap();

    assert_eq!(
        found,
        Some(format!(
            "{}/wiki/Special:FilePath/Kitchen_jar_%28blue%29.jpg",
            server.uri()
        ))
    );
}

#[tokio::test]
async fn test_wikimedia_without_hits_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(json(r#"{"query":{"search":[]}}"#))
        .mount(&server)
        .await;

    let strategy = WikimediaStrategy::new(&server.uri(), Duration::from_secs(5));
    let found = strategy.search("Nothing Here", &engine()).await.unwrap();

    assert_eq!(found, None);
}

#[tokio::test]
async fn test_pipeline_end_to_end_over_http() {
    let server = MockServer::start().await;
    let image_url = format!("{}/images/mug.jpg", server.uri());
    mount_duckduckgo(&server, "Coffee Mug", &image_url).await;
    Mock::given(method("HEAD"))
        .and(path("/images/mug.jpg"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/jpeg"))
        .mount(&server)
        .await;

    let pipeline = pipeline_with_settings(Arc::new(engine()), &local_settings(&server.uri()));
    let record = pipeline.resolve("Large Coffee Mug").await;

    assert_eq!(record.source, SOURCE_DUCKDUCKGO);
    assert_eq!(record.image_url, image_url);
    assert_eq!(record.alt_text, "Image of Large Coffee Mug");
}

#[tokio::test]
async fn test_pipeline_over_http_skips_unreachable_candidate() {
    let server = MockServer::start().await;
    // DuckDuckGo hands back an image the server does not actually serve
    mount_duckduckgo(
        &server,
        "Coffee Mug",
        &format!("{}/images/missing.jpg", server.uri()),
    )
    .await;

    let bing_image = format!("{}/cdn/mug.webp", server.uri());
    Mock::given(method("GET"))
        .and(path("/images/search"))
        .respond_with(html(format!(
            r#"<html><body><img src="{}"></body></html>"#,
            bing_image
        )))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/cdn/mug.webp"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/webp"))
        .mount(&server)
        .await;

    let pipeline = pipeline_with_settings(Arc::new(engine()), &local_settings(&server.uri()));
    let record = pipeline.resolve("Coffee Mug").await;

    assert_eq!(record.source, SOURCE_BING_IMAGES);
    assert_eq!(record.image_url, bing_image);
}

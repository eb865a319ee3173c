// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use prodimg::config::settings::Settings;
use prodimg::domain::services::batch::{BatchDriver, BatchSummary, DelayPolicy};
use prodimg::domain::services::image_validator::ImageValidator;
use prodimg::domain::services::placeholder::PlaceholderGenerator;
use prodimg::domain::services::resolution_pipeline::ResolutionPipeline;
use prodimg::engines::reqwest_engine::ReqwestEngine;
use prodimg::infrastructure::output::{csv_writer, json_writer};
use prodimg::infrastructure::search::StrategyFactory;
use prodimg::utils::{product_list, telemetry};
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 加载配置和产品列表，逐个解析产品图片并写出 CSV 与 JSON 结果
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting prodimg...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Load product list
    let mut products = product_list::load_products(&settings.batch.products_file)?;
    if let Some(limit) = settings.batch.limit {
        products.truncate(limit);
    }
    info!(
        "Loaded {} products from {}",
        products.len(),
        settings.batch.products_file
    );

    // 4. Build the shared HTTP session and the resolution pipeline
    let http = Arc::new(ReqwestEngine::new(&settings.http)?);
    let strategies = StrategyFactory::default_strategies(
        &settings.search,
        settings.http.request_timeout(),
        settings.http.validation_timeout(),
    );
    let pipeline = ResolutionPipeline::new(
        http,
        strategies,
        ImageValidator::new(settings.http.validation_timeout()),
        PlaceholderGenerator::new(&settings.search.placeholder_url),
    );
    let delay = DelayPolicy::from_secs(
        settings.batch.min_delay_secs,
        settings.batch.max_delay_secs,
    );
    let driver = BatchDriver::new(pipeline, delay);

    // 5. Resolve images
    let records = driver.run(&products).await;

    // 6. Save results
    csv_writer::save_csv(&settings.output.csv_path, &records)?;
    json_writer::save_json(&settings.output.json_path, &records)?;

    BatchSummary::from_records(&records).log();

    Ok(())
}

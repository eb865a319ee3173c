// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ProductListError;
use std::path::Path;

/// Parse a product list: one name per line, `#` comments and blank lines skipped.
pub fn parse_products(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// 读取产品列表文件
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<String>, ProductListError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ProductListError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let products = parse_products(content.trim_start_matches('\u{feff}'));
    if products.is_empty() {
        return Err(ProductListError::Empty(path.display().to_string()));
    }
    Ok(products)
}

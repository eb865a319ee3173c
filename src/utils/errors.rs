// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 结果写入错误类型
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 产品列表读取错误类型
#[derive(Error, Debug)]
pub enum ProductListError {
    #[error("Failed to read product list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Product list {0} contains no products")]
    Empty(String),
}

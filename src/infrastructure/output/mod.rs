// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 结果输出模块
///
/// 将图片记录写入 CSV 或 JSON 文件，均为 UTF-8 编码
pub mod csv_writer;
pub mod json_writer;

use crate::utils::errors::OutputError;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Create the file, and any missing parent directories, for buffered writing.
pub(crate) fn create_output_file(path: &Path) -> Result<BufWriter<File>, OutputError> {
    let io_error = |source| OutputError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    Ok(BufWriter::new(file))
}

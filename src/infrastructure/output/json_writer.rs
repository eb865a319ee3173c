// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_record::ImageRecord;
use crate::infrastructure::output::create_output_file;
use crate::utils::errors::OutputError;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Pretty-printed JSON array; non-ASCII text is written as-is.
pub fn write_json<W: Write>(mut writer: W, records: &[ImageRecord]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)
}

/// 保存结果到 JSON 文件
pub fn save_json(path: impl AsRef<Path>, records: &[ImageRecord]) -> Result<(), OutputError> {
    let path = path.as_ref();
    let writer = create_output_file(path)?;
    write_json(writer, records).map_err(|e| output_error(path, e))?;
    info!("Results saved to {}", path.display());
    Ok(())
}

/// I/O failures keep the file path; anything else is a serialization error.
fn output_error(path: &Path, error: serde_json::Error) -> OutputError {
    if error.is_io() {
        OutputError::Io {
            path: path.display().to_string(),
            source: error.into(),
        }
    } else {
        OutputError::Serialization(error)
    }
}

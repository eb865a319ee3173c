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

const CSV_HEADER: &str = "product_name,image_url,source,alt_text";

/// Quote a field when it contains a delimiter, quote or line break.
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Write records as CSV, header first.
pub fn write_csv<W: Write>(mut writer: W, records: &[ImageRecord]) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in records {
        let line = [
            record.name.as_str(),
            record.image_url.as_str(),
            record.source.as_str(),
            record.alt_text.as_str(),
        ]
        .iter()
        .map(|value| csv_escape(value))
        .collect::<Vec<_>>()
        .join(",");
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// 保存结果到 CSV 文件
pub fn save_csv(path: impl AsRef<Path>, records: &[ImageRecord]) -> Result<(), OutputError> {
    let path = path.as_ref();
    let writer = create_output_file(path)?;
    write_csv(writer, records).map_err(|source| OutputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("Results saved to {}", path.display());
    Ok(())
}

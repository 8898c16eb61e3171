use crate::core::{RateRow, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: [&str; 5] = ["timestamp", "base", "symbol", "rate", "asof_date"];

/// Appends fetched rates to a local CSV log. The file is created on first
/// use and never read back beyond the existence check.
#[derive(Debug, Clone)]
pub struct CsvAppender {
    path: PathBuf,
}

impl CsvAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row per (symbol, rate) pair, in mapping order. The header
    /// record is written only when the file does not exist yet, and the same
    /// local timestamp is reused for every row of a single call.
    pub fn append(&self, base: &str, rates: &[(String, f64)], date_str: Option<&str>) -> Result<()> {
        let is_new = match File::open(&self.path) {
            Ok(_) => false,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new {
            writer.write_record(CSV_HEADER)?;
        }

        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        for (symbol, rate) in rates {
            writer.serialize(RateRow {
                timestamp: timestamp.clone(),
                base: base.to_string(),
                symbol: symbol.clone(),
                rate: *rate,
                asof_date: date_str.unwrap_or_default().to_string(),
            })?;
        }
        writer.flush()?;

        tracing::debug!("Appended {} rows to {}", rates.len(), self.path.display());
        Ok(())
    }
}

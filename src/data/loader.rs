//! CSV Data Loader Module
//! Handles loading the battery-test dataset using Polars.

use log::info;
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Columns the rest of the pipeline depends on. Checked at load time so
/// a malformed dataset fails here with a clear error rather than deep
/// inside a transformation.
pub const REQUIRED_COLUMNS: [&str; 3] = ["type", "Re", "Rct"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("No data loaded")]
    NoData,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a CSV file using Polars and verify the required columns are
    /// present. Any read or parse failure is fatal; there is no retry or
    /// partial-load path.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        for required in REQUIRED_COLUMNS {
            if !df.get_column_names().iter().any(|c| c.as_str() == required) {
                return Err(LoaderError::MissingColumn(required.to_string()));
            }
        }

        info!("Loaded {} rows from {}", df.height(), file_path.display());
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }
}

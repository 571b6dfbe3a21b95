//! Data Processor Module
//! Filters impedance measurements and derives the cycle-indexed
//! resistance columns.

use polars::prelude::*;
use thiserror::Error;

/// Discriminator value marking an AC-impedance test record.
pub const IMPEDANCE_TYPE: &str = "impedance";

/// Column names, before and after preprocessing.
pub const COL_TYPE: &str = "type";
pub const COL_RE: &str = "Re";
pub const COL_RCT: &str = "Rct";
pub const COL_CYCLE: &str = "cycle";
pub const COL_IMPEDANCE: &str = "Battery_impedance";
pub const COL_CHARGE_TRANSFER: &str = "Charge_transfer_resistance";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles the filter / re-index / rename transformation.
pub struct DataProcessor;

impl DataProcessor {
    /// Extract impedance measurements from the raw dataset.
    ///
    /// Keeps rows where `type == "impedance"` in their original relative
    /// order, assigns a contiguous zero-based `cycle` index, and renames
    /// `Re` / `Rct` to their domain names. All other columns pass
    /// through unchanged.
    pub fn preprocess(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let mut impedance = df
            .clone()
            .lazy()
            .filter(col(COL_TYPE).eq(lit(IMPEDANCE_TYPE)))
            .collect()?;

        let cycles: Vec<i64> = (0..impedance.height() as i64).collect();
        impedance.with_column(Column::new(COL_CYCLE.into(), cycles))?;

        impedance.rename(COL_RE, COL_IMPEDANCE.into())?;
        impedance.rename(COL_RCT, COL_CHARGE_TRANSFER.into())?;

        Ok(impedance)
    }

    /// Drop rows with a missing resistance value.
    ///
    /// Both resistance columns are cast to f64; rows where either value
    /// is null or NaN are removed entirely. Missing values are a
    /// data-quality condition, not an error.
    pub fn drop_missing_resistance(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let cleaned = df
            .clone()
            .lazy()
            .with_columns([
                col(COL_IMPEDANCE).cast(DataType::Float64),
                col(COL_CHARGE_TRANSFER).cast(DataType::Float64),
            ])
            .drop_nulls(Some(vec![col(COL_IMPEDANCE), col(COL_CHARGE_TRANSFER)]))
            .filter(
                col(COL_IMPEDANCE)
                    .is_not_nan()
                    .and(col(COL_CHARGE_TRANSFER).is_not_nan()),
            )
            .collect()?;

        Ok(cleaned)
    }

    /// Extract a resistance column as f64 values, in row order.
    ///
    /// Intended for tables that have already been through
    /// [`Self::drop_missing_resistance`]; any remaining null is skipped.
    pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, ProcessorError> {
        let values = df.column(name)?.cast(&DataType::Float64)?;
        Ok(values.f64()?.into_iter().flatten().collect())
    }

    /// Extract the cycle column as i64 values, in row order.
    pub fn cycle_values(df: &DataFrame) -> Result<Vec<i64>, ProcessorError> {
        let cycles = df.column(COL_CYCLE)?.cast(&DataType::Int64)?;
        Ok(cycles.i64()?.into_iter().flatten().collect())
    }
}

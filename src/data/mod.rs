//! Data module - CSV loading and preprocessing

mod loader;
mod processor;

pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError, COL_CHARGE_TRANSFER, COL_IMPEDANCE};

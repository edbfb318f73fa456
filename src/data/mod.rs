// src/data/mod.rs
pub mod csv_loader;
pub mod validation;

pub use csv_loader::{load_candles_csv, read_candles_csv};
pub use validation::{validate_ohlc, CandleValidationError};

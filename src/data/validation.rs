// src/data/validation.rs
// Structural checks a candle sequence must pass before it is handed to the zone matcher.

use chrono::{DateTime, FixedOffset};
use log::debug;

use crate::types::CandleData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CandleValidationError {
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Sequence has {len} candles, at least {min} required")]
    TooShort { len: usize, min: usize },

    #[error("Non-finite {field} at index {index}")]
    NonFinite { index: usize, field: &'static str },

    #[error("Negative {field} at index {index}")]
    Negative { index: usize, field: &'static str },

    #[error("High below low at index {index}")]
    HighBelowLow { index: usize },

    #[error("Timestamp at index {index} is earlier than the previous candle")]
    OutOfOrder { index: usize },
}

/// Validates an OHLC sequence: minimum length, finite and non-negative prices,
/// `high >= low`, and ascending timestamps when every timestamp is RFC 3339.
pub fn validate_ohlc(candles: &[CandleData], min_len: usize) -> Result<(), CandleValidationError> {
    if candles.len() < min_len {
        return Err(CandleValidationError::TooShort {
            len: candles.len(),
            min: min_len,
        });
    }

    for (index, candle) in candles.iter().enumerate() {
        let fields = [
            ("open", candle.open),
            ("high", candle.high),
            ("low", candle.low),
            ("close", candle.close),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CandleValidationError::NonFinite { index, field });
            }
            if value < 0.0 {
                return Err(CandleValidationError::Negative { index, field });
            }
        }
        if candle.high < candle.low {
            return Err(CandleValidationError::HighBelowLow { index });
        }
    }

    check_time_order(candles)
}

fn check_time_order(candles: &[CandleData]) -> Result<(), CandleValidationError> {
    let parsed: Option<Vec<DateTime<FixedOffset>>> = candles
        .iter()
        .map(|c| DateTime::parse_from_rfc3339(&c.time).ok())
        .collect();

    let Some(times) = parsed else {
        debug!("[Validation] Timestamps are not all RFC 3339, skipping order check");
        return Ok(());
    };

    for (index, pair) in times.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(CandleValidationError::OutOfOrder { index: index + 1 });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: &str, open: f64, high: f64, low: f64, close: f64) -> CandleData {
        CandleData {
            time: time.to_string(),
            open,
            high,
            low,
            close,
            volume: 100,
        }
    }

    fn valid_sequence() -> Vec<CandleData> {
        vec![
            candle("2025-05-16T10:00:00Z", 1.0800, 1.0820, 1.0790, 1.0810),
            candle("2025-05-16T11:00:00Z", 1.0810, 1.0835, 1.0800, 1.0825),
            candle("2025-05-16T12:00:00Z", 1.0825, 1.0845, 1.0815, 1.0840),
        ]
    }

    #[test]
    fn test_valid_sequence_passes() {
        assert_eq!(validate_ohlc(&valid_sequence(), 3), Ok(()));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_ohlc(&valid_sequence(), 5),
            Err(CandleValidationError::TooShort { len: 3, min: 5 })
        );
        assert_eq!(
            validate_ohlc(&[], 1),
            Err(CandleValidationError::TooShort { len: 0, min: 1 })
        );
    }

    #[test]
    fn test_nan_rejected() {
        let mut candles = valid_sequence();
        candles[1].close = f64::NAN;
        assert_eq!(
            validate_ohlc(&candles, 1),
            Err(CandleValidationError::NonFinite { index: 1, field: "close" })
        );
    }

    #[test]
    fn test_negative_rejected() {
        let mut candles = valid_sequence();
        candles[2].low = -1.0;
        assert_eq!(
            validate_ohlc(&candles, 1),
            Err(CandleValidationError::Negative { index: 2, field: "low" })
        );
    }

    #[test]
    fn test_high_below_low_rejected() {
        let mut candles = valid_sequence();
        candles[0].high = 1.0780;
        assert_eq!(
            validate_ohlc(&candles, 1),
            Err(CandleValidationError::HighBelowLow { index: 0 })
        );
    }

    #[test]
    fn test_out_of_order_timestamps_rejected() {
        let mut candles = valid_sequence();
        candles[2].time = "2025-05-16T09:00:00Z".to_string();
        assert_eq!(
            validate_ohlc(&candles, 1),
            Err(CandleValidationError::OutOfOrder { index: 2 })
        );
    }

    #[test]
    fn test_opaque_timestamps_skip_order_check() {
        let mut candles = valid_sequence();
        candles[0].time = "bar-3".to_string();
        candles[1].time = "bar-1".to_string();
        assert_eq!(validate_ohlc(&candles, 1), Ok(()));
    }
}

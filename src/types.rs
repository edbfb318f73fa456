// src/types.rs
use serde::{Deserialize, Serialize};

use crate::zones::types::Zone;

// --- Input ---
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CandleData {
    #[serde(default)]
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: u32,
}

impl CandleData {
    /// Absolute body size, |close - open|.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Full candle range, high - low.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    pub fn has_finite_prices(&self) -> bool {
        self.open.is_finite() && self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }
}

// --- Output ---
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DetectedZone {
    #[serde(flatten)]
    pub zone: Zone,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    // Candles printed after the zone's end, i.e. how long it has survived untouched at its distal line
    pub bars_since_formation: usize,
}

impl DetectedZone {
    pub fn from_zone(zone: Zone, candles: &[CandleData]) -> Self {
        let time_at = |idx: usize| {
            candles
                .get(idx)
                .map(|c| c.time.clone())
                .filter(|t| !t.is_empty())
        };
        Self {
            start_time: time_at(zone.start_index),
            end_time: time_at(zone.end_index),
            bars_since_formation: candles.len().saturating_sub(zone.end_index + 1),
            zone,
        }
    }
}

// src/zones/patterns/mod.rs
use crate::types::CandleData;
use serde_json::Value;

// Trait for pattern recognizers
pub trait PatternRecognizer {
    fn detect(&self, candles: &[CandleData]) -> Value; // Return a single JSON object
}

mod supply_demand;

pub use supply_demand::SupplyDemandZoneRecognizer;

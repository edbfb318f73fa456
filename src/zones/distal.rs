// src/zones/distal.rs
use crate::types::CandleData;
use crate::zones::types::{Zone, ZoneType};

/// True when any candle after `end_index` trades through the distal line:
/// a low below it for demand, a high above it for supply.
pub fn price_violates_distal_line(
    candles: &[CandleData],
    end_index: usize,
    distal_level: f64,
    zone_type: ZoneType,
) -> bool {
    candles
        .iter()
        .skip(end_index.saturating_add(1))
        .any(|candle| match zone_type {
            ZoneType::Demand => candle.low < distal_level,
            ZoneType::Supply => candle.high > distal_level,
        })
}

pub fn is_zone_violated(candles: &[CandleData], zone: &Zone) -> bool {
    price_violates_distal_line(candles, zone.end_index, zone.distal_level, zone.zone_type)
}

/// Drops every zone whose distal line has already been breached.
pub fn filter_violated_zones(candles: &[CandleData], zones: Vec<Zone>) -> Vec<Zone> {
    zones
        .into_iter()
        .filter(|zone| !is_zone_violated(candles, zone))
        .collect()
}

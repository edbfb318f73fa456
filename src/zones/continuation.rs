// src/zones/continuation.rs
// Single-candle bases found inside a directional leg, between two swing points.

use std::collections::HashSet;

use crate::types::CandleData;
use crate::zones::types::{Zone, ZoneType};

fn continuation_zone(zone_type: ZoneType, index: usize, candle: &CandleData) -> Zone {
    let (distal_level, proxima_level) = match zone_type {
        ZoneType::Demand => (candle.low, candle.body_top()),
        ZoneType::Supply => (candle.high, candle.body_bottom()),
    };
    Zone {
        zone_type,
        start_index: index,
        end_index: index,
        distal_level,
        proxima_level,
        is_continuation_zone: true,
    }
}

/// Both legs around the candle at `i` must exceed its range scaled by the ratio.
fn has_strong_legs(candles: &[CandleData], leg_start: usize, i: usize, leg_end: usize, ratio: f64) -> bool {
    let base_length = candles[i].range();
    let before = (candles[leg_start].close - candles[i].close).abs();
    let after = (candles[i].close - candles[leg_end].close).abs();
    before > base_length * ratio && after > base_length * ratio
}

/// Scans each maximum-to-next-minimum leg for a candle that closes lower than
/// the one before it and below its own open.
pub fn find_supply_continuation_zones(
    candles: &[CandleData],
    minima: &[usize],
    maxima: &[usize],
    min_base_rally_ratio: f64,
) -> Vec<Zone> {
    let mut seen = HashSet::new();
    let mut zones = Vec::new();

    for &max_index in maxima {
        let Some(&min_index) = minima.iter().find(|&&m| m > max_index) else {
            continue;
        };
        if min_index >= candles.len() {
            continue;
        }

        for i in max_index + 1..min_index {
            let candle = &candles[i];
            let breaks_trend = candle.close < candles[i - 1].close && candle.is_bearish();
            if breaks_trend
                && has_strong_legs(candles, max_index, i, min_index, min_base_rally_ratio)
                && seen.insert(i)
            {
                zones.push(continuation_zone(ZoneType::Supply, i, candle));
            }
        }
    }

    zones
}

/// Scans each nearest-preceding-maximum-to-minimum leg for a candle that closes
/// higher than the one before it and above its own open.
pub fn find_demand_continuation_zones(
    candles: &[CandleData],
    minima: &[usize],
    maxima: &[usize],
    min_base_rally_ratio: f64,
) -> Vec<Zone> {
    let mut seen = HashSet::new();
    let mut zones = Vec::new();

    for &min_index in minima {
        let Some(&max_index) = maxima.iter().rev().find(|&&m| m < min_index) else {
            continue;
        };
        if min_index >= candles.len() {
            continue;
        }

        for i in max_index + 1..min_index {
            let candle = &candles[i];
            let breaks_trend = candle.close > candles[i - 1].close && candle.is_bullish();
            if breaks_trend
                && has_strong_legs(candles, max_index, i, min_index, min_base_rally_ratio)
                && seen.insert(i)
            {
                zones.push(continuation_zone(ZoneType::Demand, i, candle));
            }
        }
    }

    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::distal::filter_violated_zones;

    fn c(open: f64, high: f64, low: f64, close: f64) -> CandleData {
        CandleData {
            time: String::new(),
            open,
            high,
            low,
            close,
            volume: 0,
        }
    }

    fn down_leg_with_pullback() -> Vec<CandleData> {
        vec![
            c(109.0, 110.5, 108.5, 110.0), // swing high
            c(110.0, 110.2, 105.8, 106.0),
            c(106.0, 106.2, 101.8, 102.0),
            c(101.5, 103.0, 101.0, 102.8), // bullish pullback
            c(102.8, 103.0, 98.8, 99.0),
            c(99.0, 99.2, 96.8, 97.0),
            c(97.0, 97.2, 94.8, 95.0), // swing low
        ]
    }

    #[test]
    fn test_demand_continuation_inside_down_leg() {
        let candles = down_leg_with_pullback();
        let zones = find_demand_continuation_zones(&candles, &[6], &[0], 1.5);
        assert_eq!(zones.len(), 1);

        let zone = &zones[0];
        assert_eq!(zone.zone_type, ZoneType::Demand);
        assert_eq!(zone.start_index, 3);
        assert_eq!(zone.end_index, 3);
        assert_eq!(zone.distal_level, 101.0);
        assert_eq!(zone.proxima_level, 102.8);
        assert!(zone.is_continuation_zone);

        // price kept falling through the base low afterwards
        assert!(filter_violated_zones(&candles, zones).is_empty());
    }

    #[test]
    fn test_overlapping_legs_do_not_duplicate_zones() {
        let candles = down_leg_with_pullback();
        let zones = find_demand_continuation_zones(&candles, &[4, 6], &[0], 1.5);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].start_index, 3);
    }

    #[test]
    fn test_demand_leg_starts_at_the_nearest_maximum() {
        // with a later maximum at 4, the pullback at 3 lies outside the 4..6 leg
        let candles = down_leg_with_pullback();
        assert!(find_demand_continuation_zones(&candles, &[6], &[0, 4], 1.5).is_empty());
    }

    #[test]
    fn test_demand_needs_a_preceding_maximum() {
        let candles = down_leg_with_pullback();
        assert!(find_demand_continuation_zones(&candles, &[6], &[], 1.5).is_empty());
        assert!(find_demand_continuation_zones(&candles, &[6], &[6], 1.5).is_empty());
    }

    #[test]
    fn test_supply_continuation_inside_down_leg() {
        let candles = vec![
            c(106.2, 108.0, 105.8, 107.5), // swing high
            c(107.5, 107.6, 105.0, 105.2),
            c(105.2, 105.4, 102.8, 103.0),
            c(103.0, 103.2, 100.6, 100.8),
            c(100.8, 101.0, 98.4, 98.6),
            c(98.6, 98.8, 96.2, 96.4),
            c(96.4, 96.6, 94.0, 94.2), // swing low
        ];
        let zones = find_supply_continuation_zones(&candles, &[6], &[0], 1.5);
        let indices: Vec<usize> = zones.iter().map(|z| z.start_index).collect();
        assert_eq!(indices, vec![2, 3, 4]);
        assert!(zones.iter().all(|z| z.distal_level >= z.proxima_level));
        assert_eq!(zones[0].distal_level, 105.4);
        assert_eq!(zones[0].proxima_level, 103.0);

        // a larger ratio leaves only the candle with the most balanced legs
        let strict = find_supply_continuation_zones(&candles, &[6], &[0], 2.5);
        let indices: Vec<usize> = strict.iter().map(|z| z.start_index).collect();
        assert_eq!(indices, vec![3]);
    }

    #[test]
    fn test_supply_needs_a_following_minimum() {
        let candles = down_leg_with_pullback();
        assert!(find_supply_continuation_zones(&candles, &[], &[0], 1.5).is_empty());
    }
}

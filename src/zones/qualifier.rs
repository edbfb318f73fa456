// src/zones/qualifier.rs
// Disqualifies low-probability bases and bases without momentum leaving them.

use log::trace;

use crate::config::MatcherConfig;
use crate::types::CandleData;
use crate::zones::candidates::ZoneCandidate;
use crate::zones::types::ZoneType;

/// A candle whose body is at most `body_ratio` of its full range.
pub fn is_doji(candle: &CandleData, body_ratio: f64) -> bool {
    candle.body() <= body_ratio * candle.range()
}

/// A candle whose body covers more than half of its range.
pub fn is_momentum_candle(candle: &CandleData) -> bool {
    candle.body() > 0.5 * candle.range()
}

/// True when every candle in `start..=end` closes strictly beyond the previous
/// candle's close in the zone's direction: higher for demand, lower for supply.
/// The first candle of the window is compared against the candle before it.
pub fn is_staircase_pattern(
    candles: &[CandleData],
    start: usize,
    end: usize,
    zone_type: ZoneType,
) -> bool {
    let first = start.max(1);
    let last = end.min(candles.len().saturating_sub(1));
    if first > last {
        return false;
    }

    (first..=last).all(|i| {
        let (prev, close) = (candles[i - 1].close, candles[i].close);
        match zone_type {
            ZoneType::Demand => close > prev,
            ZoneType::Supply => close < prev,
        }
    })
}

pub fn has_doji_pattern(base_candles: &[CandleData], body_ratio: f64) -> bool {
    base_candles
        .iter()
        .filter(|c| is_doji(c, body_ratio))
        .count()
        > 1
}

pub fn is_low_probability_zone(
    candles: &[CandleData],
    start: usize,
    end: usize,
    zone_type: ZoneType,
    doji_body_ratio: f64,
) -> bool {
    if is_staircase_pattern(candles, start, end, zone_type) {
        return true;
    }
    let last = end.min(candles.len().saturating_sub(1));
    start <= last && has_doji_pattern(&candles[start..=last], doji_body_ratio)
}

/// Counts momentum candles after `base_index` until a close falls back past the
/// base candle's close (below it for demand, above it for supply). A strong
/// crossing candle still counts before the scan stops.
pub fn count_momentum_candles(
    candles: &[CandleData],
    base_index: usize,
    zone_type: ZoneType,
    limit: usize,
) -> usize {
    let Some(base) = candles.get(base_index) else {
        return 0;
    };

    let mut count = 0;
    for candle in &candles[base_index + 1..] {
        if is_momentum_candle(candle) {
            count += 1;
        }
        let crossed_back = match zone_type {
            ZoneType::Demand => candle.close < base.close,
            ZoneType::Supply => candle.close > base.close,
        };
        if crossed_back || count >= limit {
            break;
        }
    }
    count
}

pub fn has_momentum_confirmation(
    candles: &[CandleData],
    base_index: usize,
    zone_type: ZoneType,
    min_momentum_candles: usize,
) -> bool {
    min_momentum_candles == 0
        || count_momentum_candles(candles, base_index, zone_type, min_momentum_candles)
            >= min_momentum_candles
}

/// Runs every qualification check against a ratio-accepted candidate.
pub fn qualifies(candles: &[CandleData], candidate: &ZoneCandidate, config: &MatcherConfig) -> bool {
    if is_low_probability_zone(
        candles,
        candidate.base_index,
        candidate.end_index,
        candidate.zone_type,
        config.doji_body_ratio,
    ) {
        trace!(
            "[Qualifier] {} base at {} rejected: low probability pattern",
            candidate.zone_type,
            candidate.base_index
        );
        return false;
    }

    if !has_momentum_confirmation(
        candles,
        candidate.base_index,
        candidate.zone_type,
        config.min_momentum_candles,
    ) {
        trace!(
            "[Qualifier] {} base at {} rejected: not enough momentum",
            candidate.zone_type,
            candidate.base_index
        );
        return false;
    }

    true
}

// src/zones/candidates.rs
// Base-versus-rally ratio test anchored at each extremum.

use crate::types::CandleData;
use crate::zones::types::{Zone, ZoneType};

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCandidate {
    pub zone_type: ZoneType,
    pub base_index: usize,
    pub end_index: usize,
    pub base_length: f64,
    pub rally_length: f64,
    pub distal_level: f64,
    pub proxima_level: f64,
}

impl ZoneCandidate {
    pub fn into_zone(self) -> Zone {
        Zone {
            zone_type: self.zone_type,
            start_index: self.base_index,
            end_index: self.end_index,
            distal_level: self.distal_level,
            proxima_level: self.proxima_level,
            is_continuation_zone: false,
        }
    }
}

fn in_bounds(index: usize, window: usize, len: usize) -> bool {
    index >= window && index < len.saturating_sub(window)
}

/// Demand candidates at local lows. The rally is measured forward, `window`
/// candles after the base candle.
pub fn build_demand_candidates(
    candles: &[CandleData],
    minima: &[usize],
    window: usize,
    min_base_rally_ratio: f64,
) -> Vec<ZoneCandidate> {
    minima
        .iter()
        .copied()
        .filter(|&m| in_bounds(m, window, candles.len()))
        .filter_map(|m| {
            let base = &candles[m];
            let base_length = base.close - base.low;
            let rally_length = candles[m + window].close - base.close;

            if rally_length > base_length * min_base_rally_ratio {
                Some(ZoneCandidate {
                    zone_type: ZoneType::Demand,
                    base_index: m,
                    end_index: m + window,
                    base_length,
                    rally_length,
                    distal_level: base.low,
                    proxima_level: base.body_top(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Supply candidates at local highs. The rally is measured backward, from
/// `window` candles before the base candle up into it.
pub fn build_supply_candidates(
    candles: &[CandleData],
    maxima: &[usize],
    window: usize,
    min_base_rally_ratio: f64,
) -> Vec<ZoneCandidate> {
    maxima
        .iter()
        .copied()
        .filter(|&x| in_bounds(x, window, candles.len()))
        .filter_map(|x| {
            let base = &candles[x];
            let base_length = base.high - base.close;
            let rally_length = base.close - candles[x - window].close;

            if rally_length > base_length * min_base_rally_ratio {
                Some(ZoneCandidate {
                    zone_type: ZoneType::Supply,
                    base_index: x,
                    end_index: x + window,
                    base_length,
                    rally_length,
                    distal_level: base.high,
                    proxima_level: base.body_bottom(),
                })
            } else {
                None
            }
        })
        .collect()
}

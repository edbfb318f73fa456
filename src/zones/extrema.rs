// src/zones/extrema.rs
use crate::types::CandleData;

/// Ascending indices of local lows (`minima`) and local highs (`maxima`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extrema {
    pub minima: Vec<usize>,
    pub maxima: Vec<usize>,
}

/// True when `len` candles hold at least one full `window` on both sides of an index.
pub fn fits_window(len: usize, window: usize) -> bool {
    window > 0 && window <= len.saturating_sub(1) / 2
}

/// Finds local minima of `low` and local maxima of `high`.
///
/// An index qualifies only when its value is strictly beyond every value within
/// `window` candles on both sides, so ties are never reported and indices closer
/// than `window` to either end are skipped.
pub fn find_local_extrema(candles: &[CandleData], window: usize) -> Extrema {
    let mut extrema = Extrema::default();
    if !fits_window(candles.len(), window) {
        return extrema;
    }

    for i in window..candles.len() - window {
        let mut neighbours = (i - window..=i + window).filter(|&j| j != i);

        let low = candles[i].low;
        if neighbours.clone().all(|j| low < candles[j].low) {
            extrema.minima.push(i);
        }

        let high = candles[i].high;
        if neighbours.all(|j| high > candles[j].high) {
            extrema.maxima.push(i);
        }
    }

    extrema
}

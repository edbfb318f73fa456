// tests/common/mod.rs
// Shared candle fixtures for the integration tests.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zone_matcher::types::CandleData;

pub fn candle(open: f64, high: f64, low: f64, close: f64) -> CandleData {
    CandleData {
        time: String::new(),
        open,
        high,
        low,
        close,
        volume: 1000,
    }
}

/// Strong bullish candle opening at `open`: body 1.8 inside a 2.2 range.
pub fn rising(open: f64) -> CandleData {
    candle(open, open + 2.0, open - 0.2, open + 1.8)
}

fn push_rally(candles: &mut Vec<CandleData>, mut open: f64, count: usize) {
    for _ in 0..count {
        candles.push(rising(open));
        open += 1.8;
    }
}

/// Downtrend into a single low at index 4 (low 100.0, close 100.6), then
/// eight strong bullish candles. Indices 0..=12.
pub fn v_reversal() -> Vec<CandleData> {
    let mut candles = vec![
        candle(110.0, 111.0, 108.0, 109.0),
        candle(109.0, 109.5, 106.0, 106.5),
        candle(106.5, 107.0, 104.0, 104.5),
        candle(104.5, 105.0, 102.0, 102.5),
        candle(102.5, 102.8, 100.0, 100.6),
    ];
    push_rally(&mut candles, 100.6, 8);
    candles
}

/// Same shape as `v_reversal`, but the low candle at index 4 already closes
/// above the close before it, so every close from 3 to 8 steps higher.
pub fn staircase_base() -> Vec<CandleData> {
    let mut candles = vec![
        candle(104.0, 105.0, 103.0, 103.5),
        candle(103.5, 104.0, 102.0, 102.5),
        candle(102.5, 103.0, 101.0, 101.5),
        candle(101.5, 102.0, 100.5, 100.8),
        candle(100.0, 101.2, 99.0, 101.0),
    ];
    push_rally(&mut candles, 101.0, 8);
    candles
}

/// Rally into a swing high at 5, a falling leg with lower highs down to a
/// swing low at 11, then a shallow bounce that stays below every earlier high.
pub fn down_leg() -> Vec<CandleData> {
    vec![
        candle(100.0, 101.0, 99.5, 100.5),
        candle(100.5, 102.0, 100.2, 101.8),
        candle(101.8, 103.5, 101.5, 103.2),
        candle(103.2, 105.0, 103.0, 104.8),
        candle(104.8, 106.5, 104.5, 106.2),
        candle(106.2, 108.0, 105.8, 107.5), // swing high
        candle(107.5, 107.6, 105.0, 105.2),
        candle(105.2, 105.4, 102.8, 103.0),
        candle(103.0, 103.2, 100.6, 100.8),
        candle(100.8, 101.0, 98.4, 98.6),
        candle(98.6, 98.8, 96.2, 96.4),
        candle(96.4, 96.6, 94.0, 94.2), // swing low
        candle(94.6, 95.6, 94.5, 95.4),
        candle(95.4, 96.0, 95.0, 95.8),
        candle(95.8, 96.4, 95.4, 96.2),
        candle(96.2, 96.8, 95.8, 96.6),
    ]
}

/// Seeded random walk with consistent OHLC geometry.
pub fn random_walk(seed: u64, len: usize) -> Vec<CandleData> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut close: f64 = 1000.0;
    (0..len)
        .map(|i| {
            let open = close;
            close = open + rng.gen_range(-4.0..4.0);
            let high = open.max(close) + rng.gen_range(0.0..2.0);
            let low = open.min(close) - rng.gen_range(0.0..2.0);
            CandleData {
                time: format!("bar-{}", i),
                open,
                high,
                low,
                close,
                volume: rng.gen_range(100..10_000),
            }
        })
        .collect()
}

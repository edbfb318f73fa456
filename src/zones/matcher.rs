// src/zones/matcher.rs
//! Supply/demand zone detection over a single OHLC sequence.
//!
//! One pass runs, in order: extrema location, base/rally candidate building for
//! both sides, qualification (staircase, doji and momentum checks), the optional
//! continuation scan, and finally the distal-violation filter over every zone.
//! The pass never fails; degenerate input simply yields no zones.

use log::{debug, warn};

use crate::config::MatcherConfig;
use crate::types::CandleData;
use crate::zones::candidates::{build_demand_candidates, build_supply_candidates, ZoneCandidate};
use crate::zones::continuation::{find_demand_continuation_zones, find_supply_continuation_zones};
use crate::zones::distal::filter_violated_zones;
use crate::zones::extrema::{find_local_extrema, fits_window};
use crate::zones::qualifier::qualifies;
use crate::zones::types::{Zone, ZoneSet};

fn qualified_zones(candles: &[CandleData], candidates: Vec<ZoneCandidate>, config: &MatcherConfig) -> Vec<Zone> {
    candidates
        .into_iter()
        .filter(|candidate| qualifies(candles, candidate, config))
        .map(ZoneCandidate::into_zone)
        .collect()
}

/// Runs a full detection pass. Pure: the result depends only on the inputs.
pub fn detect_zones(config: &MatcherConfig, candles: &[CandleData]) -> ZoneSet {
    let window = config.extrema_window;

    if !fits_window(candles.len(), window) {
        debug!(
            "[ZoneMatcher] {} candles cannot hold an extrema window of {}, no zones",
            candles.len(),
            window
        );
        return ZoneSet::default();
    }
    if let Some(index) = candles.iter().position(|c| !c.has_finite_prices()) {
        warn!("[ZoneMatcher] Non-finite price at index {}, skipping detection", index);
        return ZoneSet::default();
    }

    let extrema = find_local_extrema(candles, window);
    debug!(
        "[ZoneMatcher] {} minima, {} maxima with window {}",
        extrema.minima.len(),
        extrema.maxima.len(),
        window
    );

    let ratio = config.min_base_rally_ratio;
    let supply_candidates = build_supply_candidates(candles, &extrema.maxima, window, ratio);
    let demand_candidates = build_demand_candidates(candles, &extrema.minima, window, ratio);
    debug!(
        "[ZoneMatcher] Ratio test passed: {} supply, {} demand candidates",
        supply_candidates.len(),
        demand_candidates.len()
    );

    let mut supply_zones = qualified_zones(candles, supply_candidates, config);
    let mut demand_zones = qualified_zones(candles, demand_candidates, config);

    if config.detect_continuation_patterns {
        let supply_continuation =
            find_supply_continuation_zones(candles, &extrema.minima, &extrema.maxima, ratio);
        let demand_continuation =
            find_demand_continuation_zones(candles, &extrema.minima, &extrema.maxima, ratio);
        debug!(
            "[ZoneMatcher] Continuation candidates: {} supply, {} demand",
            supply_continuation.len(),
            demand_continuation.len()
        );
        supply_zones.extend(supply_continuation);
        demand_zones.extend(demand_continuation);
    }

    let zones = ZoneSet {
        supply_zones: filter_violated_zones(candles, supply_zones),
        demand_zones: filter_violated_zones(candles, demand_zones),
    };

    debug!(
        "[ZoneMatcher] Completed: {} supply, {} demand zones over {} candles",
        zones.supply_zones.len(),
        zones.demand_zones.len(),
        candles.len()
    );
    zones
}

/// Holds the detection settings and a copy of the last pass's zones.
///
/// The cached lists are overwritten on every call; they are a convenience for
/// callers, the returned lists are the result.
#[derive(Debug, Clone, Default)]
pub struct SupplyDemandPatternMatcher {
    config: MatcherConfig,
    supply_zones: Vec<Zone>,
    demand_zones: Vec<Zone>,
}

impl SupplyDemandPatternMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            supply_zones: Vec::new(),
            demand_zones: Vec::new(),
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Returns `(supply_zones, demand_zones)` for `candles`.
    pub fn detect_supply_demand_zones(&mut self, candles: &[CandleData]) -> (Vec<Zone>, Vec<Zone>) {
        let (supply_zones, demand_zones) = detect_zones(&self.config, candles).into_tuple();
        self.supply_zones = supply_zones.clone();
        self.demand_zones = demand_zones.clone();
        (supply_zones, demand_zones)
    }

    pub fn supply_zones(&self) -> &[Zone] {
        &self.supply_zones
    }

    pub fn demand_zones(&self) -> &[Zone] {
        &self.demand_zones
    }
}

// src/zones/zone_detection.rs
// Zone detection entry point shared by the HTTP endpoints and the CLI scanner

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::MatcherConfig;
use crate::data::validation::validate_ohlc;
use crate::errors::CoreError;
use crate::types::{CandleData, DetectedZone};
use crate::zones::matcher::SupplyDemandPatternMatcher;

// ==================== ZONE DETECTION REQUEST ====================

#[derive(Debug, Clone)]
pub struct ZoneDetectionRequest {
    pub symbol: String,
    pub timeframe: String,
    pub candles: Vec<CandleData>,
    pub config: MatcherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDetectionResult {
    pub symbol: String,
    pub timeframe: String,
    pub config: MatcherConfig,
    pub supply_zones: Vec<DetectedZone>,
    pub demand_zones: Vec<DetectedZone>,
    pub total_zones_detected: usize,
    pub candles_analyzed: usize,
}

// ==================== CORE ZONE DETECTION ENGINE ====================
#[derive(Debug, Clone)]
pub struct ZoneDetectionEngine {
    min_candles: usize,
}

impl Default for ZoneDetectionEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ZoneDetectionEngine {
    pub fn new(min_candles: usize) -> Self {
        Self { min_candles }
    }

    pub fn min_candles(&self) -> usize {
        self.min_candles
    }

    /// Validates the request, runs one matcher pass and attaches timestamps.
    pub fn detect_zones(&self, request: ZoneDetectionRequest) -> Result<ZoneDetectionResult, CoreError> {
        debug!(
            "[ZoneEngine] Detecting zones for {}/{} with {} candles",
            request.symbol,
            request.timeframe,
            request.candles.len()
        );

        request.config.validate()?;
        validate_ohlc(&request.candles, self.min_candles)?;

        let mut matcher = SupplyDemandPatternMatcher::new(request.config.clone());
        let (supply_zones, demand_zones) = matcher.detect_supply_demand_zones(&request.candles);

        let supply_zones: Vec<DetectedZone> = supply_zones
            .into_iter()
            .map(|zone| DetectedZone::from_zone(zone, &request.candles))
            .collect();
        let demand_zones: Vec<DetectedZone> = demand_zones
            .into_iter()
            .map(|zone| DetectedZone::from_zone(zone, &request.candles))
            .collect();

        let total_detected = supply_zones.len() + demand_zones.len();
        info!(
            "[ZoneEngine] {}/{}: {} supply, {} demand zones from {} candles",
            request.symbol,
            request.timeframe,
            supply_zones.len(),
            demand_zones.len(),
            request.candles.len()
        );

        Ok(ZoneDetectionResult {
            symbol: request.symbol,
            timeframe: request.timeframe,
            config: request.config,
            supply_zones,
            demand_zones,
            total_zones_detected: total_detected,
            candles_analyzed: request.candles.len(),
        })
    }
}

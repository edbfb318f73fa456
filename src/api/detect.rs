// src/api/detect.rs
use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{MatcherConfig, MatcherParams};
use crate::data::validation::validate_ohlc;
use crate::errors::CoreError;
use crate::types::CandleData;
use crate::zones::patterns::{PatternRecognizer, SupplyDemandZoneRecognizer};
use crate::zones::zone_detection::{ZoneDetectionEngine, ZoneDetectionRequest};

// Data structures
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AnalyzeRequest {
    pub symbol: Option<String>,
    pub timeframe: Option<String>,
    pub candles: Vec<CandleData>,
    #[serde(default)]
    pub params: MatcherParams,
}

/// Shared by all workers: server-wide matcher defaults and the engine.
#[derive(Debug, Clone)]
pub struct AppState {
    pub base_config: MatcherConfig,
    pub engine: ZoneDetectionEngine,
}

impl AppState {
    pub fn new(base_config: MatcherConfig, min_candles: usize) -> Self {
        Self {
            base_config,
            engine: ZoneDetectionEngine::new(min_candles),
        }
    }

    fn resolve_config(&self, params: &MatcherParams) -> Result<MatcherConfig, CoreError> {
        let config = self.base_config.with_overrides(params);
        config.validate()?;
        Ok(config)
    }
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// Chart payload: zones in the recognizer's JSON layout.
pub async fn analyze_handler(
    state: web::Data<AppState>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, CoreError> {
    let request = body.into_inner();
    let config = state.resolve_config(&request.params)?;
    validate_ohlc(&request.candles, state.engine.min_candles())?;

    info!(
        "/analyze {}/{}: {} candles",
        request.symbol.as_deref().unwrap_or("-"),
        request.timeframe.as_deref().unwrap_or("-"),
        request.candles.len()
    );

    let recognizer = SupplyDemandZoneRecognizer::new(config);
    Ok(HttpResponse::Ok().json(recognizer.detect(&request.candles)))
}

/// Typed zones with timestamps, as produced by the detection engine.
pub async fn zones_handler(
    state: web::Data<AppState>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, CoreError> {
    let request = body.into_inner();
    let config = state.resolve_config(&request.params)?;

    let result = state.engine.detect_zones(ZoneDetectionRequest {
        symbol: request.symbol.unwrap_or_default(),
        timeframe: request.timeframe.unwrap_or_default(),
        candles: request.candles,
        config,
    })?;

    Ok(HttpResponse::Ok().json(result))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analyze", web::post().to(analyze_handler))
        .route("/zones", web::post().to(zones_handler));
}

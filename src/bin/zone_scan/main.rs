// main.rs
mod config;
mod output;

use clap::Parser;
use config::*;
use log::info;

use zone_matcher::config::MatcherConfig;
use zone_matcher::data::load_candles_csv;
use zone_matcher::errors::CoreError;
use zone_matcher::zones::{ZoneDetectionEngine, ZoneDetectionRequest};

fn run(args: Args) -> Result<(), CoreError> {
    let config = MatcherConfig::from_env()?.with_overrides(&args.matcher_params());
    let candles = load_candles_csv(&args.input)?;

    info!(
        "Scanning {} candles (window {}, ratio {}, continuation {})",
        candles.len(),
        config.extrema_window,
        config.min_base_rally_ratio,
        config.detect_continuation_patterns
    );

    let engine = ZoneDetectionEngine::default();
    let result = engine.detect_zones(ZoneDetectionRequest {
        symbol: args.symbol.clone(),
        timeframe: args.timeframe.clone(),
        candles,
        config,
    })?;

    output::write_result(&result, args.format, args.output.as_deref())
}

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();
    setup_logging(args.debug);

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

// config.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use zone_matcher::config::MatcherParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "zone_scan")]
#[command(about = "Detect supply/demand zones in an OHLC candle CSV file")]
pub struct Args {
    /// Candle CSV with open, high, low, close columns (time and volume optional)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Symbol label carried into the output
    #[arg(long, default_value = "")]
    pub symbol: String,

    /// Timeframe label carried into the output
    #[arg(long, default_value = "")]
    pub timeframe: String,

    /// Rally must exceed the base length times this ratio
    #[arg(long)]
    pub min_base_rally_ratio: Option<f64>,

    /// Half-width of the local extrema window, also the base width
    #[arg(long)]
    pub extrema_window: Option<usize>,

    /// Momentum candles required leaving the base
    #[arg(long)]
    pub min_momentum_candles: Option<usize>,

    /// Also detect single-candle continuation zones inside trend legs
    #[arg(long)]
    pub continuation: bool,

    /// Body-to-range ratio at or below which a candle counts as a doji
    #[arg(long)]
    pub doji_body_ratio: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    pub fn matcher_params(&self) -> MatcherParams {
        MatcherParams {
            min_base_rally_ratio: self.min_base_rally_ratio,
            extrema_window: self.extrema_window,
            min_momentum_candles: self.min_momentum_candles,
            detect_continuation_patterns: self.continuation.then_some(true),
            doji_body_ratio: self.doji_body_ratio,
        }
    }
}

pub fn setup_logging(debug: bool) {
    use env_logger::{Builder, Target};
    use log::LevelFilter;

    let mut builder = Builder::from_default_env();
    // stdout may carry the result
    builder.target(Target::Stderr);

    if debug {
        builder.filter_level(LevelFilter::Debug);
    } else {
        builder.filter_level(LevelFilter::Info);
    }

    builder.init();
}

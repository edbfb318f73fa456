// src/data/csv_loader.rs
use csv::ReaderBuilder;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::validation::CandleValidationError;
use crate::errors::CoreError;
use crate::types::CandleData;

struct ColumnIndices {
    time: Option<usize>,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: Option<usize>,
}

impl ColumnIndices {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CandleValidationError> {
        let mut time_idx = None;
        let mut open_idx = None;
        let mut high_idx = None;
        let mut low_idx = None;
        let mut close_idx = None;
        let mut volume_idx = None;

        for (i, name) in headers.iter().enumerate() {
            match name.trim().to_ascii_lowercase().as_str() {
                "time" | "_time" | "date" | "timestamp" => time_idx = time_idx.or(Some(i)),
                "open" => open_idx = Some(i),
                "high" => high_idx = Some(i),
                "low" => low_idx = Some(i),
                "close" => close_idx = Some(i),
                "volume" => volume_idx = Some(i),
                _ => {}
            }
        }

        let require = |idx: Option<usize>, name: &str| {
            idx.ok_or_else(|| CandleValidationError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            time: time_idx,
            open: require(open_idx, "open")?,
            high: require(high_idx, "high")?,
            low: require(low_idx, "low")?,
            close: require(close_idx, "close")?,
            volume: volume_idx,
        })
    }
}

fn parse_price(record: &csv::StringRecord, idx: usize, row: usize, column: &str) -> Result<f64, CoreError> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse::<f64>().map_err(|_| {
        CoreError::Parse(format!(
            "Row {}: column '{}' has non-numeric value '{}'",
            row, column, raw
        ))
    })
}

/// Reads candles from any CSV source with a header row. Column order is free;
/// `open`, `high`, `low`, `close` are required, `time` and `volume` are optional.
pub fn read_candles_csv<R: Read>(reader: R) -> Result<Vec<CandleData>, CoreError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = ColumnIndices::from_headers(&headers)?;

    let mut candles = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let time = match columns.time {
            Some(idx) => record.get(idx).unwrap_or("").trim().to_string(),
            None => row.to_string(),
        };
        // Volume is informational only; a bad cell must not drop the candle
        let volume = columns
            .volume
            .and_then(|idx| record.get(idx))
            .and_then(|v| v.trim().parse::<f64>().ok())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0);

        candles.push(CandleData {
            time,
            open: parse_price(&record, columns.open, row, "open")?,
            high: parse_price(&record, columns.high, row, "high")?,
            low: parse_price(&record, columns.low, row, "low")?,
            close: parse_price(&record, columns.close, row, "close")?,
            volume,
        });
    }

    debug!("[CsvLoader] Parsed {} candles", candles.len());
    Ok(candles)
}

pub fn load_candles_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CandleData>, CoreError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let candles = read_candles_csv(file)?;
    info!("Loaded {} candles from {}", candles.len(), path.display());
    Ok(candles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_influx_style_headers() {
        let data = "\
_time,close,high,low,open,volume
2025-05-16T10:00:00Z,1.0810,1.0820,1.0790,1.0800,1000
2025-05-16T11:00:00Z,1.0825,1.0835,1.0800,1.0810,1100
";
        let candles = read_candles_csv(data.as_bytes()).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, "2025-05-16T10:00:00Z");
        assert_eq!(candles[0].open, 1.0800);
        assert_eq!(candles[0].close, 1.0810);
        assert_eq!(candles[1].volume, 1100);
    }

    #[test]
    fn test_missing_time_uses_row_index() {
        let data = "open,high,low,close\n1,2,0.5,1.5\n1.5,2.5,1,2\n";
        let candles = read_candles_csv(data.as_bytes()).unwrap();
        assert_eq!(candles[0].time, "0");
        assert_eq!(candles[1].time, "1");
        assert_eq!(candles[1].volume, 0);
    }

    #[test]
    fn test_missing_required_column() {
        let data = "time,open,high,close\n2025-05-16T10:00:00Z,1,2,1.5\n";
        let err = read_candles_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(CandleValidationError::MissingColumn(ref c)) if c == "low"
        ));
    }

    #[test]
    fn test_non_numeric_price() {
        let data = "time,open,high,low,close\nt0,1,2,abc,1.5\n";
        let err = read_candles_csv(data.as_bytes()).unwrap_err();
        match err {
            CoreError::Parse(msg) => {
                assert!(msg.contains("'low'"));
                assert!(msg.contains("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_candles_csv("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}

// output.rs
use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use zone_matcher::errors::CoreError;
use zone_matcher::types::DetectedZone;
use zone_matcher::zones::ZoneDetectionResult;

use crate::config::OutputFormat;

fn write_csv<W: Write>(result: &ZoneDetectionResult, sink: W) -> Result<(), CoreError> {
    let mut writer = csv::Writer::from_writer(sink);

    writer.write_record([
        "zone_type",
        "start_index",
        "end_index",
        "start_time",
        "end_time",
        "distal_level",
        "proxima_level",
        "is_continuation_zone",
    ])?;

    let zones: Vec<&DetectedZone> = result
        .supply_zones
        .iter()
        .chain(result.demand_zones.iter())
        .collect();

    for detected in zones {
        let zone = &detected.zone;
        writer.write_record(&[
            zone.zone_type.to_string(),
            zone.start_index.to_string(),
            zone.end_index.to_string(),
            detected.start_time.clone().unwrap_or_default(),
            detected.end_time.clone().unwrap_or_default(),
            zone.distal_level.to_string(),
            zone.proxima_level.to_string(),
            zone.is_continuation_zone.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_to<W: Write>(result: &ZoneDetectionResult, format: OutputFormat, mut sink: W) -> Result<(), CoreError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut sink, result)?;
            writeln!(sink)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(result, sink),
    }
}

pub fn write_result(
    result: &ZoneDetectionResult,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), CoreError> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_to(result, format, file)?;
            info!("Results saved to: {}", path.display());
            Ok(())
        }
        None => write_to(result, format, io::stdout().lock()),
    }
}

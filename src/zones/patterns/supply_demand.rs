use crate::config::MatcherConfig;
use crate::types::CandleData;
use crate::zones::matcher::detect_zones;
use crate::zones::patterns::PatternRecognizer;
use crate::zones::types::{Zone, ZoneType};
use serde_json::json;
use serde_json::Value;

/// Chart-facing wrapper around the zone matcher.
#[derive(Debug, Clone, Default)]
pub struct SupplyDemandZoneRecognizer {
    pub config: MatcherConfig,
}

impl SupplyDemandZoneRecognizer {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    fn zone_to_json(&self, zone: &Zone, candles: &[CandleData]) -> Value {
        let zone_type = match zone.zone_type {
            ZoneType::Supply => "supply_zone",
            ZoneType::Demand => "demand_zone",
        };
        json!({
            "category": "Price",
            "type": zone_type,
            "start_time": candles.get(zone.start_index).map(|c| c.time.clone()),
            "end_time": candles.get(zone.end_index).map(|c| c.time.clone()),
            "zone_high": zone.zone_high(),
            "zone_low": zone.zone_low(),
            "distal_level": zone.distal_level,
            "proxima_level": zone.proxima_level,
            "fifty_percent_line": zone.fifty_percent_line(),
            "detection_method": zone.detection_method(),
            "is_continuation_zone": zone.is_continuation_zone,
            "start_idx": zone.start_index,
            "end_idx": zone.end_index
        })
    }
}

impl PatternRecognizer for SupplyDemandZoneRecognizer {
    fn detect(&self, candles: &[CandleData]) -> Value {
        let zones = detect_zones(&self.config, candles);

        let supply_zones: Vec<Value> = zones
            .supply_zones
            .iter()
            .map(|z| self.zone_to_json(z, candles))
            .collect();
        let demand_zones: Vec<Value> = zones
            .demand_zones
            .iter()
            .map(|z| self.zone_to_json(z, candles))
            .collect();

        json!({
            "pattern": "supply_demand_zone",
            "total_bars": candles.len(),
            "total_detected": supply_zones.len() + demand_zones.len(),
            "config": self.config,
            "datasets": {
                "price": 2, // supply_zones and demand_zones
                "oscillators": 0,
                "lines": 0
            },
            "data": {
                "price": {
                    "supply_zones": {
                        "total": supply_zones.len(),
                        "zones": supply_zones
                    },
                    "demand_zones": {
                        "total": demand_zones.len(),
                        "zones": demand_zones
                    }
                },
                "oscillators": [],
                "lines": []
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(time: &str, open: f64, high: f64, low: f64, close: f64) -> CandleData {
        CandleData {
            time: time.to_string(),
            open,
            high,
            low,
            close,
            volume: 0,
        }
    }

    #[test]
    fn test_payload_shape_for_short_input() {
        let recognizer = SupplyDemandZoneRecognizer::default();
        let candles = vec![c("t0", 1.0, 1.1, 0.9, 1.05)];
        let result = recognizer.detect(&candles);

        assert_eq!(result["pattern"], "supply_demand_zone");
        assert_eq!(result["total_bars"], 1);
        assert_eq!(result["total_detected"], 0);
        assert_eq!(result["data"]["price"]["supply_zones"]["total"], 0);
        assert!(result["data"]["price"]["demand_zones"]["zones"]
            .as_array()
            .unwrap()
            .is_empty());
        assert_eq!(result["config"]["extrema_window"], 4);
    }

    #[test]
    fn test_zone_json_fields() {
        let recognizer = SupplyDemandZoneRecognizer::default();
        let candles = vec![
            c("t0", 1.0, 1.1, 0.9, 1.05),
            c("t1", 1.05, 1.3, 1.0, 1.25),
        ];
        let zone = Zone {
            zone_type: ZoneType::Demand,
            start_index: 0,
            end_index: 1,
            distal_level: 0.9,
            proxima_level: 1.05,
            is_continuation_zone: false,
        };
        let value = recognizer.zone_to_json(&zone, &candles);
        assert_eq!(value["type"], "demand_zone");
        assert_eq!(value["start_time"], "t0");
        assert_eq!(value["end_time"], "t1");
        assert_eq!(value["zone_low"], 0.9);
        assert_eq!(value["zone_high"], 1.05);
        assert_eq!(value["detection_method"], "extrema");
        assert_eq!(value["end_idx"], 1);
    }
}

// src/zones/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Supply,
    Demand,
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneType::Supply => write!(f, "supply"),
            ZoneType::Demand => write!(f, "demand"),
        }
    }
}

/// A price region expected to act as resistance (supply) or support (demand).
///
/// The distal line is the far boundary (the stop side); the proxima line is the
/// near boundary (the entry side). For demand the distal line is the lower one,
/// for supply the upper one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub zone_type: ZoneType,
    pub start_index: usize,
    pub end_index: usize,
    pub distal_level: f64,
    pub proxima_level: f64,
    pub is_continuation_zone: bool,
}

impl Zone {
    pub fn zone_high(&self) -> f64 {
        self.distal_level.max(self.proxima_level)
    }

    pub fn zone_low(&self) -> f64 {
        self.distal_level.min(self.proxima_level)
    }

    pub fn fifty_percent_line(&self) -> f64 {
        (self.distal_level + self.proxima_level) / 2.0
    }

    pub fn height(&self) -> f64 {
        (self.distal_level - self.proxima_level).abs()
    }

    pub fn detection_method(&self) -> &'static str {
        if self.is_continuation_zone {
            "continuation"
        } else {
            "extrema"
        }
    }
}

/// Output of one detection pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneSet {
    pub supply_zones: Vec<Zone>,
    pub demand_zones: Vec<Zone>,
}

impl ZoneSet {
    pub fn total(&self) -> usize {
        self.supply_zones.len() + self.demand_zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn into_tuple(self) -> (Vec<Zone>, Vec<Zone>) {
        (self.supply_zones, self.demand_zones)
    }
}

// src/zones/mod.rs
pub mod candidates;
pub mod continuation;
pub mod distal;
pub mod extrema;
pub mod matcher;
pub mod patterns;
pub mod qualifier;
pub mod types;
pub mod zone_detection;

pub use matcher::{detect_zones, SupplyDemandPatternMatcher};
pub use types::{Zone, ZoneSet, ZoneType};
pub use zone_detection::{ZoneDetectionEngine, ZoneDetectionRequest, ZoneDetectionResult};

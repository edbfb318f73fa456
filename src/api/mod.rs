// src/api/mod.rs
pub mod detect;

pub use detect::{configure_routes, AnalyzeRequest, AppState};

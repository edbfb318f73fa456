// src/lib.rs
pub mod api;
pub mod config;
pub mod data;
pub mod errors;
pub mod types;
pub mod zones;

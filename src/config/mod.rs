/// Application settings loaded from config.toml
pub mod app;

/// Known-product catalog connection settings
pub mod database;

pub use app::{AppConfig, QuantityMode};

pub mod config;
pub mod telemetry;

pub use config::{ConfigError, Settings};

pub mod config;

pub use config::{AppConfig, CurveConfig, FilterConfig, PresetConfig};

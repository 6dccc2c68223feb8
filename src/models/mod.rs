pub mod config;

pub use config::{AppConfig, EngineSettings, TranslateConfig};

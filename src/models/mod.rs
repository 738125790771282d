pub mod config;

pub use config::{AppConfig, ColorsConfig, LocalesConfig, MasksConfig, DEFAULT_CONFIG_FILE};

//! Configuration management for hotcopy

mod settings;
pub mod filter;
pub mod override_config;

// Re-export main types
pub use filter::FilterMode;
pub use override_config::{DestinationOverride, OverrideKind};
pub use settings::{ProjectEntry, WatchConfig, CONFIG_FILE_NAMES};

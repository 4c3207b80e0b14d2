//! hotcopy - copy-on-save for web-commerce plugin projects
//!
//! This crate provides functionality to:
//! - Decide, for a single saved file, whether it should be copied into the
//!   owning project's build-output directory, and to where
//! - Resolve saved files to their owning plugin project via a registry
//! - Emit one `CopyResult` per processed save to subscribed listeners
pub mod config;
pub mod error;
pub mod interfaces;
pub mod pipeline;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{DestinationOverride, FilterMode, OverrideKind, WatchConfig};
pub use interfaces::{FnSink, ProjectMetadataProvider, ResultSink};
pub use pipeline::{CopyDecision, CopyPipeline};
pub use services::ProjectRegistry;

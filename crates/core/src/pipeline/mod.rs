//! The copy decision pipeline
//!
//! For one saved file: decide whether it qualifies under the current
//! filter configuration, compute the destination, perform the copy, and
//! emit a [`CopyResult`] to every listener. Failures are data at this
//! boundary; the pipeline never propagates an error for an ordinary
//! skip or failed save.

pub mod destination;

use crate::config::WatchConfig;
use crate::interfaces::{ProjectMetadataProvider, ResultSink};
use crate::types::{CopyResult, SavedFileEvent};
use std::path::PathBuf;

pub use destination::{destination_for, project_relative};

/// What the pipeline decided to do for one saved file, before any
/// filesystem write happens. `check`-style dry runs stop here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyDecision {
    /// Deliberately skipped; nothing will be written.
    Filtered { reason: String },
    /// The save qualifies but cannot be honored.
    Failed { reason: String },
    /// Copy the saved file to `destination`; `secondary` carries the
    /// standard build-output destination when a redirecting override asks
    /// for both.
    Copy {
        destination: PathBuf,
        secondary: Option<PathBuf>,
    },
}

pub struct CopyPipeline<P: ProjectMetadataProvider> {
    provider: P,
    sinks: Vec<Box<dyn ResultSink>>,
}

impl<P: ProjectMetadataProvider> CopyPipeline<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            sinks: Vec::new(),
        }
    }

    /// Subscribe a listener to copy outcomes.
    pub fn add_sink(&mut self, sink: impl ResultSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Run the decision steps without writing anything.
    pub fn decide(&mut self, event: &SavedFileEvent, config: &WatchConfig) -> CopyDecision {
        let source = &event.source_path;

        if !config.enabled {
            return CopyDecision::Filtered {
                reason: "watching is disabled".to_string(),
            };
        }

        let ext = match event.extension() {
            Some(ext) => ext,
            None => {
                return CopyDecision::Filtered {
                    reason: format!("'{}' has no file extension", source.display()),
                };
            }
        };

        if !config.extension_passes(&ext) {
            let reason = match config.filter_mode {
                crate::config::FilterMode::Whitelist => {
                    format!("extension '{ext}' is not whitelisted")
                }
                crate::config::FilterMode::Blacklist => {
                    format!("extension '{ext}' is blacklisted")
                }
            };
            return CopyDecision::Filtered { reason };
        }

        let meta = match self.provider.resolve(source) {
            Ok(meta) => meta,
            Err(e) => {
                return CopyDecision::Failed {
                    reason: e.to_string(),
                };
            }
        };

        if config.require_copy_to_output && !meta.copy_to_output {
            return CopyDecision::Filtered {
                reason: format!("project '{}' doesn't copy content to output", meta.name),
            };
        }

        let relative = match project_relative(&meta.local_path, source) {
            Ok(relative) => relative,
            Err(e) => {
                return CopyDecision::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let standard = destination_for(&meta.local_path, &meta.output_dir, &relative);

        if let Some(redirect) = config.override_for(source, &relative) {
            let destination = redirect.destination_for(&meta.local_path, source);

            // Redirect targets aren't build products, so only their parent
            // directory has to exist.
            match destination.parent() {
                Some(parent) if parent.is_dir() => {}
                _ => {
                    return CopyDecision::Failed {
                        reason: format!(
                            "override destination directory for '{}' does not exist",
                            destination.display()
                        ),
                    };
                }
            }

            let secondary = if redirect.copy_to_original_destination {
                if !standard.is_file() {
                    return CopyDecision::Failed {
                        reason: format!("no prior output file at '{}'", standard.display()),
                    };
                }
                Some(standard)
            } else {
                None
            };

            return CopyDecision::Copy {
                destination,
                secondary,
            };
        }

        // Only refresh files the normal build already produced once.
        if !standard.is_file() {
            return CopyDecision::Failed {
                reason: format!("no prior output file at '{}'", standard.display()),
            };
        }

        CopyDecision::Copy {
            destination: standard,
            secondary: None,
        }
    }

    /// Decide, copy, and emit one result to every sink.
    pub fn process(&mut self, event: &SavedFileEvent, config: &WatchConfig) -> CopyResult {
        let decision = self.decide(event, config);
        let result = self.execute(event, decision);
        self.emit(&result);
        result
    }

    fn execute(&self, event: &SavedFileEvent, decision: CopyDecision) -> CopyResult {
        let source = &event.source_path;
        match decision {
            CopyDecision::Filtered { reason } => {
                tracing::debug!("Skipping '{}': {}", source.display(), reason);
                CopyResult::filtered(source, reason)
            }
            CopyDecision::Failed { reason } => {
                tracing::warn!("Couldn't copy '{}': {}", source.display(), reason);
                CopyResult::failed(source, reason)
            }
            CopyDecision::Copy {
                destination,
                secondary,
            } => {
                if let Err(e) = std::fs::copy(source, &destination) {
                    return CopyResult::failed(
                        source,
                        format!("copy to '{}' failed: {}", destination.display(), e),
                    );
                }
                if let Some(secondary) = secondary {
                    if let Err(e) = std::fs::copy(source, &secondary) {
                        return CopyResult::failed(
                            source,
                            format!(
                                "copied to '{}' but copy to '{}' failed: {}",
                                destination.display(),
                                secondary.display(),
                                e
                            ),
                        );
                    }
                }
                tracing::info!("Copied '{}' to '{}'", source.display(), destination.display());
                CopyResult::copied(source, destination)
            }
        }
    }

    fn emit(&mut self, result: &CopyResult) {
        for sink in &mut self.sinks {
            sink.on_result(result);
        }
    }
}

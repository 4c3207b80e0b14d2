use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// How a save notification was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The file was copied over its build-output counterpart.
    Copied,
    /// The file was deliberately skipped (disabled, no extension, extension
    /// filter, copy-to-output flag).
    Filtered,
    /// The copy should have happened but could not (unresolvable project,
    /// missing prior output file, IO error).
    Failed,
}

/// The outcome of running the copy pipeline for one saved file.
///
/// Emitted to listeners on every processed save, success or not.
/// `failure_reason` is set exactly when `copied_to` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    pub saved_file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copied_to: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    pub outcome: Outcome,
}

impl CopyResult {
    pub fn copied(saved_file: impl Into<PathBuf>, copied_to: impl Into<PathBuf>) -> Self {
        Self {
            saved_file: saved_file.into(),
            copied_to: Some(copied_to.into()),
            failure_reason: None,
            outcome: Outcome::Copied,
        }
    }

    pub fn filtered(saved_file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            saved_file: saved_file.into(),
            copied_to: None,
            failure_reason: Some(reason.into()),
            outcome: Outcome::Filtered,
        }
    }

    pub fn failed(saved_file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            saved_file: saved_file.into(),
            copied_to: None,
            failure_reason: Some(reason.into()),
            outcome: Outcome::Failed,
        }
    }

    pub fn was_copied(&self) -> bool {
        self.outcome == Outcome::Copied
    }
}

impl fmt::Display for CopyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.copied_to, &self.failure_reason) {
            (Some(copied_to), _) => write!(
                f,
                "Copied file from: '{}' to: '{}'",
                self.saved_file.display(),
                copied_to.display()
            ),
            (None, Some(reason)) => write!(
                f,
                "Didn't copy file from: '{}' because: '{}'.",
                self.saved_file.display(),
                reason
            ),
            // Unreachable through the constructors
            (None, None) => write!(f, "Didn't copy file from: '{}'.", self.saved_file.display()),
        }
    }
}

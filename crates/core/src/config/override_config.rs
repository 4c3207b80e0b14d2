use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the `target` of a [`DestinationOverride`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    /// Matches a file whose absolute path equals `target` exactly.
    AbsolutePath,
    /// Matches a file whose project-relative path equals `target`.
    RelativePath,
    /// Matches files whose project-relative path matches the expression.
    Regex,
}

/// Redirects the destination of a matching saved file.
///
/// `destination` is a directory relative to the owning project's root; the
/// saved file's name is appended. With `copy_to_original_destination` the
/// file is copied to the standard build-output destination as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DestinationOverride {
    pub kind: OverrideKind,
    pub target: String,
    pub destination: PathBuf,
    #[serde(default)]
    pub copy_to_original_destination: bool,
}

impl DestinationOverride {
    /// Whether this override applies to the given saved file.
    ///
    /// `relative_path` is the file's path relative to its project root;
    /// regex and relative targets match against it with `/` separators so
    /// patterns behave the same on every platform.
    pub fn matches(&self, source_path: &Path, relative_path: &Path) -> bool {
        match self.kind {
            OverrideKind::AbsolutePath => Path::new(&self.target) == source_path,
            OverrideKind::RelativePath => Path::new(&self.target) == relative_path,
            OverrideKind::Regex => {
                let rel = slash_normalized(relative_path);
                match Regex::new(&self.target) {
                    Ok(re) => re.is_match(&rel),
                    Err(e) => {
                        tracing::warn!("Invalid override pattern '{}': {}", self.target, e);
                        false
                    }
                }
            }
        }
    }

    /// Where a matching file gets copied: the override directory under the
    /// project root, keeping the original file name.
    pub fn destination_for(&self, project_root: &Path, source_path: &Path) -> PathBuf {
        let mut dest = project_root.join(&self.destination);
        if let Some(name) = source_path.file_name() {
            dest.push(name);
        }
        dest
    }
}

fn slash_normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

//! Destination path math
//!
//! A saved file's build-output counterpart is its project-relative path
//! replayed under the project's output directory:
//! `<root>/<output_dir>/<relative>`. No component is case-normalized; the
//! relative path round-trips exactly.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// The saved file's path relative to its project root.
///
/// Errors when the file does not live under the root, which means the
/// metadata provider and the event disagree about ownership.
pub fn project_relative(project_root: &Path, source_path: &Path) -> Result<PathBuf> {
    source_path
        .strip_prefix(project_root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            Error::ProjectError(format!(
                "file '{}' isn't under the project root '{}'",
                source_path.display(),
                project_root.display()
            ))
        })
}

/// Where the build output's copy of the file lives.
pub fn destination_for(project_root: &Path, output_dir: &Path, relative: &Path) -> PathBuf {
    project_root.join(output_dir).join(relative)
}

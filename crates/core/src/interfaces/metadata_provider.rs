use crate::error::Result;
use crate::types::ProjectMetadata;
use std::path::Path;

/// Resolves a saved file to the metadata of its owning project.
///
/// Implementations answer "which project contains this file, where is that
/// project's root, and where does its active build configuration put
/// output". Failure to resolve is an ordinary error the pipeline reports
/// through the result event; it must not panic.
pub trait ProjectMetadataProvider {
    /// Resolve the project owning `source_path`.
    fn resolve(&mut self, source_path: &Path) -> Result<ProjectMetadata>;

    /// Drop any cached resolutions (called when configuration changes).
    fn invalidate(&mut self) {}
}

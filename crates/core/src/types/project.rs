use serde::Serialize;
use std::path::PathBuf;

/// Resolved metadata for the project that owns a saved file.
///
/// `output_dir` is relative to `local_path`, the way build configurations
/// express it ("bin/Debug"). `copy_to_output` mirrors the project-level
/// "copy to output" property of the build system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub local_path: PathBuf,
    pub output_dir: PathBuf,
    pub copy_to_output: bool,
}

impl ProjectMetadata {
    /// Absolute path of the project's active output directory.
    pub fn output_root(&self) -> PathBuf {
        self.local_path.join(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_root() {
        let meta = ProjectMetadata {
            name: "Shop.Plugin.Payments".to_string(),
            local_path: PathBuf::from("/solution/Plugins/Payments"),
            output_dir: PathBuf::from("bin/Debug"),
            copy_to_output: true,
        };
        assert_eq!(
            meta.output_root(),
            PathBuf::from("/solution/Plugins/Payments/bin/Debug")
        );
    }
}

//! Test support for the workspace integration tests
//!
//! Builds throwaway solution trees: one plugin project with sources and a
//! prebuilt build-output directory, the way a debug build leaves them.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct PluginFixture {
    temp: TempDir,
    pub project_root: PathBuf,
    pub output_dir: PathBuf,
}

impl PluginFixture {
    pub fn new(output_dir: &str) -> Self {
        let temp = TempDir::new().expect("temp dir");
        let project_root = temp.path().join("proj");
        fs::create_dir_all(project_root.join(output_dir)).expect("output dir");
        Self {
            temp,
            project_root,
            output_dir: PathBuf::from(output_dir),
        }
    }

    pub fn solution_root(&self) -> &Path {
        self.temp.path()
    }

    /// Write a source file under the project root, creating parents.
    pub fn write_source(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.project_root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("source parent");
        }
        fs::write(&path, contents).expect("source file");
        path
    }

    /// Write the prebuilt output counterpart of `rel`, creating parents.
    pub fn write_output(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.project_root.join(&self.output_dir).join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("output parent");
        }
        fs::write(&path, contents).expect("output file");
        path
    }

    /// Path of the output counterpart of `rel`, whether or not it exists.
    pub fn output_path(&self, rel: &str) -> PathBuf {
        self.project_root.join(&self.output_dir).join(rel)
    }

    /// Write a `.hotcopy.json` at the solution root.
    pub fn write_config(&self, json: &str) -> PathBuf {
        let path = self.temp.path().join(".hotcopy.json");
        fs::write(&path, json).expect("config file");
        path
    }
}

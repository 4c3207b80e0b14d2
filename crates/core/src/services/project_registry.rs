//! Registry-backed project metadata provider
//!
//! The headless stand-in for an IDE's project model: a fixed list of
//! registered project roots, matched against saved-file paths by longest
//! prefix. Lookups are cached per containing directory since saves cluster
//! heavily in a handful of folders.

use crate::config::{ProjectEntry, WatchConfig};
use crate::error::{Error, Result};
use crate::interfaces::ProjectMetadataProvider;
use crate::types::ProjectMetadata;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

const CACHE_CAPACITY: usize = 256;

pub struct ProjectRegistry {
    projects: Vec<ProjectMetadata>,
    cache: LruCache<PathBuf, ProjectMetadata>,
}

impl ProjectRegistry {
    pub fn new(projects: Vec<ProjectMetadata>) -> Self {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            projects,
            cache: LruCache::new(capacity),
        }
    }

    /// Build a registry from a loaded config, resolving relative project
    /// roots against `base_dir` (the config file's directory).
    pub fn from_config(config: &WatchConfig, base_dir: &Path) -> Self {
        let projects = config
            .projects
            .iter()
            .map(|entry| Self::metadata_from_entry(entry, base_dir))
            .collect();
        Self::new(projects)
    }

    fn metadata_from_entry(entry: &ProjectEntry, base_dir: &Path) -> ProjectMetadata {
        let root = if entry.root.is_absolute() {
            entry.root.clone()
        } else {
            base_dir.join(&entry.root)
        };
        let name = entry.name.clone().unwrap_or_else(|| {
            root.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| root.display().to_string())
        });

        ProjectMetadata {
            name,
            local_path: root,
            output_dir: entry.output_dir.clone(),
            copy_to_output: entry.copy_to_output,
        }
    }

    pub fn projects(&self) -> &[ProjectMetadata] {
        &self.projects
    }

    /// The registered project whose root is the longest prefix of `path`.
    fn best_match(&self, path: &Path) -> Option<&ProjectMetadata> {
        self.projects
            .iter()
            .filter(|p| path.starts_with(&p.local_path))
            .max_by_key(|p| p.local_path.components().count())
    }
}

impl ProjectMetadataProvider for ProjectRegistry {
    fn resolve(&mut self, source_path: &Path) -> Result<ProjectMetadata> {
        // Cache by containing directory, not by file: sibling saves share
        // one entry.
        let cache_key = source_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| source_path.to_path_buf());

        if let Some(hit) = self.cache.get(&cache_key) {
            tracing::trace!("Project cache hit for {:?}", cache_key);
            return Ok(hit.clone());
        }

        let found = self.best_match(source_path).cloned().ok_or_else(|| {
            Error::ProjectError(format!(
                "no watched project contains '{}'",
                source_path.display()
            ))
        })?;

        tracing::debug!(
            "Resolved '{}' to project '{}'",
            source_path.display(),
            found.name
        );
        self.cache.put(cache_key, found.clone());
        Ok(found)
    }

    fn invalidate(&mut self) {
        self.cache.clear();
    }
}

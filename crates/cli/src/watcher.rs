//! File system watcher hosting the copy pipeline
//!
//! One recursive watcher per registered project root, one worker draining
//! the event channel. Decisions run sequentially in arrival order with the
//! configuration snapshotted per save, so two saves of the same file can
//! never interleave their copies. Saving the config file itself reloads it
//! in place.

use anyhow::{bail, Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

use hotcopy_core::{CopyPipeline, ProjectRegistry, SavedFileEvent, WatchConfig};

use crate::display::StatusSink;

/// Directories that never contain watched sources.
const IGNORE_DIRS: &[&str] = &[".git", ".vs", "node_modules", "obj"];

/// Cap on the debounce bookkeeping map.
const DEBOUNCE_MAP_LIMIT: usize = 1024;

pub struct WatchSession {
    config_path: PathBuf,
    base_dir: PathBuf,
    config: WatchConfig,
    pipeline: CopyPipeline<ProjectRegistry>,
    project_roots: Vec<PathBuf>,
    output_roots: Vec<PathBuf>,
    last_seen: HashMap<PathBuf, Instant>,
}

impl WatchSession {
    pub fn new(config_path: &Path) -> Result<Self> {
        let config_path = config_path
            .canonicalize()
            .with_context(|| format!("Failed to resolve config path '{}'", config_path.display()))?;
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        let config = WatchConfig::load_from_file(&config_path)
            .with_context(|| format!("Failed to load '{}'", config_path.display()))?;

        let registry = ProjectRegistry::from_config(&config, &base_dir);
        let project_roots: Vec<PathBuf> = registry
            .projects()
            .iter()
            .map(|p| p.local_path.clone())
            .collect();
        let output_roots: Vec<PathBuf> =
            registry.projects().iter().map(|p| p.output_root()).collect();

        let mut pipeline = CopyPipeline::new(registry);
        pipeline.add_sink(StatusSink);

        Ok(Self {
            config_path,
            base_dir,
            config,
            pipeline,
            project_roots,
            output_roots,
            last_seen: HashMap::new(),
        })
    }

    /// Watch until the process is terminated.
    pub fn run(&mut self) -> Result<()> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(tx, notify::Config::default())
            .context("Failed to create file watcher")?;

        let mut watching = 0usize;
        for root in &self.project_roots {
            match watcher.watch(root, RecursiveMode::Recursive) {
                Ok(()) => watching += 1,
                Err(e) => warn!("Not watching '{}': {}", root.display(), e),
            }
        }
        if watching == 0 {
            bail!(
                "No watchable project roots in '{}'; check the 'projects' section",
                self.config_path.display()
            );
        }

        // The config file's directory, for in-place reloads.
        if let Err(e) = watcher.watch(&self.base_dir, RecursiveMode::NonRecursive) {
            warn!("Config hot-reload unavailable: {}", e);
        }

        println!(
            "🔍 Watching {} plugin project(s) (config: {})",
            watching,
            self.config_path.display()
        );
        for project in self.pipeline.provider_mut().projects() {
            println!(
                "   📦 {} → {}",
                project.name,
                project.output_dir.display()
            );
        }

        for res in rx {
            match res {
                Ok(event) => self.handle_event(&mut watcher, event),
                Err(e) => warn!("Watch error: {}", e),
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, watcher: &mut RecommendedWatcher, event: Event) {
        if !is_relevant(&event.kind) {
            return;
        }

        for path in event.paths {
            if self.is_config_file(&path) {
                self.reload(watcher);
                continue;
            }
            self.handle_saved_path(path);
        }
    }

    fn handle_saved_path(&mut self, path: PathBuf) {
        // The config-dir watch also reports unrelated solution-root files;
        // only files under a watched project are save notifications.
        if !self.project_roots.iter().any(|root| path.starts_with(root)) {
            trace!("Outside watched projects: '{}'", path.display());
            return;
        }
        if self.should_ignore(&path) {
            trace!("Ignoring '{}'", path.display());
            return;
        }
        if !path.is_file() {
            return;
        }
        if !self.debounce(&path) {
            trace!("Debounced '{}'", path.display());
            return;
        }

        // Snapshot the configuration for this decision.
        let config = self.config.clone();
        self.pipeline.process(&SavedFileEvent::new(path), &config);
    }

    fn should_ignore(&self, path: &Path) -> bool {
        let noisy = path.components().any(|c| {
            c.as_os_str()
                .to_str()
                .map(|s| IGNORE_DIRS.contains(&s))
                .unwrap_or(false)
        });
        if noisy {
            return true;
        }

        // Never react to files under a project's own output directory, or
        // our copies would re-trigger the pipeline.
        self.output_roots.iter().any(|out| path.starts_with(out))
    }

    /// True when the path should be processed now; false inside the
    /// debounce window.
    fn debounce(&mut self, path: &Path) -> bool {
        let window = Duration::from_millis(self.config.debounce_ms);
        let now = Instant::now();

        if self.last_seen.len() > DEBOUNCE_MAP_LIMIT {
            self.last_seen.retain(|_, seen| now.duration_since(*seen) < window);
        }

        match self.last_seen.get(path) {
            Some(seen) if now.duration_since(*seen) < window => false,
            _ => {
                self.last_seen.insert(path.to_path_buf(), now);
                true
            }
        }
    }

    fn is_config_file(&self, path: &Path) -> bool {
        path.canonicalize()
            .map(|p| p == self.config_path)
            .unwrap_or(false)
    }

    fn reload(&mut self, watcher: &mut RecommendedWatcher) {
        let config = match WatchConfig::load_from_file(&self.config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Keeping previous configuration, reload failed: {}", e);
                return;
            }
        };

        let registry = ProjectRegistry::from_config(&config, &self.base_dir);
        let new_roots: Vec<PathBuf> = registry
            .projects()
            .iter()
            .map(|p| p.local_path.clone())
            .collect();

        for root in &self.project_roots {
            if !new_roots.contains(root) {
                let _ = watcher.unwatch(root);
            }
        }
        for root in &new_roots {
            if !self.project_roots.contains(root) {
                if let Err(e) = watcher.watch(root, RecursiveMode::Recursive) {
                    warn!("Not watching '{}': {}", root.display(), e);
                }
            }
        }

        self.output_roots = registry.projects().iter().map(|p| p.output_root()).collect();
        self.project_roots = new_roots;
        *self.pipeline.provider_mut() = registry;
        self.config = config;

        debug!("Configuration reloaded from '{}'", self.config_path.display());
        println!("🔄 Reloaded configuration");
    }
}

fn is_relevant(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Modify(_) | EventKind::Create(_))
}

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::filter::{self, FilterMode};
use super::override_config::DestinationOverride;

/// Config file names searched for, in order, when walking up from a file.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".hotcopy.json", "hotcopy.json"];

/// Extensions watched when a config does not list any: the file kinds a
/// running debug session can pick up without a rebuild.
pub const DEFAULT_EXTENSIONS: [&str; 3] = [".cshtml", ".js", ".css"];

const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// A plugin project registered for watching.
///
/// `root` may be relative to the config file's directory; `output_dir` is
/// always relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub root: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default = "default_true")]
    pub copy_to_output: bool,
}

/// The session-wide watch configuration.
///
/// Created from a persisted settings file, mutated only through the config
/// file, and read (snapshotted) on every save event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WatchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub filter_mode: FilterMode,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub require_copy_to_output: bool,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub overrides: Vec<DestinationOverride>,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            filter_mode: FilterMode::Whitelist,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            require_copy_to_output: false,
            projects: Vec::new(),
            overrides: Vec::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl WatchConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: WatchConfig = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Canonicalize the extension list: leading dot, lowercase, first
    /// occurrence wins. An empty list falls back to the defaults.
    pub fn normalize(&mut self) {
        if self.extensions.is_empty() {
            self.extensions = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
            return;
        }

        let mut seen = Vec::with_capacity(self.extensions.len());
        for ext in &self.extensions {
            let token = filter::normalize_extension(ext);
            if token != "." && !seen.contains(&token) {
                seen.push(token);
            }
        }
        self.extensions = seen;
    }

    /// Whether a file with the given extension token passes the
    /// whitelist/blacklist filter.
    pub fn extension_passes(&self, ext: &str) -> bool {
        filter::extension_passes(self.filter_mode, &self.extensions, ext)
    }

    /// First override matching the saved file, if any.
    pub fn override_for(
        &self,
        source_path: &Path,
        relative_path: &Path,
    ) -> Option<&DestinationOverride> {
        self.overrides
            .iter()
            .find(|o| o.matches(source_path, relative_path))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverrideKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = WatchConfig::default();
        assert!(config.enabled);
        assert_eq!(config.filter_mode, FilterMode::Whitelist);
        assert_eq!(config.extensions, vec![".cshtml", ".js", ".css"]);
        assert!(!config.require_copy_to_output);
    }

    #[test]
    fn test_normalize_dedups_and_lowercases() {
        let mut config = WatchConfig {
            extensions: vec![
                "JS".to_string(),
                ".js".to_string(),
                "Css".to_string(),
                "".to_string(),
            ],
            ..Default::default()
        };
        config.normalize();
        assert_eq!(config.extensions, vec![".js", ".css"]);
    }

    #[test]
    fn test_empty_extension_list_falls_back_to_defaults() {
        let mut config = WatchConfig {
            extensions: Vec::new(),
            ..Default::default()
        };
        config.normalize();
        assert_eq!(config.extensions, vec![".cshtml", ".js", ".css"]);
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".hotcopy.json");

        let config = WatchConfig {
            filter_mode: FilterMode::Blacklist,
            extensions: vec![".min.js".to_string(), ".map".to_string()],
            projects: vec![ProjectEntry {
                name: Some("Shop.Plugin.Payments".to_string()),
                root: PathBuf::from("Plugins/Payments"),
                output_dir: PathBuf::from("bin/Debug"),
                copy_to_output: true,
            }],
            overrides: vec![DestinationOverride {
                kind: OverrideKind::Regex,
                target: r"^Views/".to_string(),
                destination: PathBuf::from("wwwroot/Views"),
                copy_to_original_destination: true,
            }],
            ..Default::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = WatchConfig::load_from_file(&path).unwrap();

        assert!(loaded.enabled);
        assert_eq!(loaded.filter_mode, FilterMode::Blacklist);
        assert_eq!(loaded.projects.len(), 1);
        assert_eq!(loaded.overrides.len(), 1);
        assert!(loaded.overrides[0].copy_to_original_destination);
    }

    #[test]
    fn test_load_normalizes_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hotcopy.json");
        fs::write(&path, r#"{ "extensions": ["JS", "css"] }"#).unwrap();

        let loaded = WatchConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.extensions, vec![".js", ".css"]);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("Plugins/Payments/Views");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(".hotcopy.json"), "{}").unwrap();

        let found = WatchConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(".hotcopy.json"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        // Walks past the temp dir and finds nothing relevant above it, or
        // stops at the filesystem root.
        let found = WatchConfig::find_config_file(temp_dir.path());
        if let Some(path) = found {
            assert!(!path.starts_with(temp_dir.path()));
        }
    }
}

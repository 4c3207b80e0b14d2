use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;

use hotcopy_core::WatchConfig;

use crate::watcher::WatchSession;

pub fn watch_command(path: Option<&str>, config: Option<&str>) -> Result<()> {
    let config_path = match config {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let start = match path {
                Some(p) => PathBuf::from(p),
                None => env::current_dir().context("Failed to get current directory")?,
            };
            let start = start
                .canonicalize()
                .with_context(|| format!("Failed to resolve '{}'", start.display()))?;

            WatchConfig::find_config_file(&start).ok_or_else(|| {
                anyhow!(
                    "No hotcopy config found from '{}'; run 'hotcopy init' first",
                    start.display()
                )
            })?
        }
    };

    WatchSession::new(&config_path)?.run()
}

use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use hotcopy_core::{CopyDecision, CopyPipeline, ProjectRegistry, SavedFileEvent, WatchConfig};

use crate::display::format_result;

pub fn check_command(filepath: &str, copy: bool, show_config: bool) -> Result<()> {
    let source = absolutize(Path::new(filepath));
    debug!("Checking file: {}", source.display());

    let start = source
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source.clone());
    let config_path = WatchConfig::find_config_file(&start).ok_or_else(|| {
        anyhow!(
            "No hotcopy config found from '{}'; run 'hotcopy init' first",
            start.display()
        )
    })?;
    let config = WatchConfig::load_from_file(&config_path)
        .with_context(|| format!("Failed to load '{}'", config_path.display()))?;
    let base_dir = config_path.parent().unwrap_or(Path::new("."));

    println!("🔍 Checking: {}", source.display());
    println!("{}", "=".repeat(80));

    if show_config {
        println!("📁 Config: {}", config_path.display());
        println!(
            "{}",
            serde_json::to_string_pretty(&config).context("Failed to render config")?
        );
        println!("{}", "=".repeat(80));
    }

    let mut pipeline = CopyPipeline::new(ProjectRegistry::from_config(&config, base_dir));
    let event = SavedFileEvent::new(&source);

    match pipeline.decide(&event, &config) {
        CopyDecision::Filtered { reason } => {
            println!("🚫 Would not copy: {reason}");
        }
        CopyDecision::Failed { reason } => {
            println!("❌ Copy would fail: {reason}");
        }
        CopyDecision::Copy {
            destination,
            secondary,
        } => {
            println!("✅ Would copy to: {}", destination.display());
            if let Some(secondary) = secondary {
                println!("   ↳ and to: {}", secondary.display());
            }
        }
    }

    if copy {
        let result = pipeline.process(&event, &config);
        println!("{}", format_result(&result));
    }

    Ok(())
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .ok()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|| path.to_path_buf())
    }
}

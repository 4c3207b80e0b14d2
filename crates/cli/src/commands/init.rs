use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use hotcopy_core::config::{ProjectEntry, WatchConfig};

/// Plugin projects ship a Description.txt whose `SystemName:` line names
/// the plugin's output folder.
const DESCRIPTION_FILE: &str = "Description.txt";
const SYSTEM_NAME_PREFIX: &str = "SystemName:";

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let root = root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    println!("🚀 Initializing hotcopy in: {}", root.display());

    let config_path = root.join(".hotcopy.json");
    if config_path.exists() && !force {
        println!(
            "🚫 '{}' already exists (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    let projects = discover_projects(&root);
    println!("📦 Found {} plugin project(s)", projects.len());
    for project in &projects {
        println!(
            "   • {} ({})",
            project.name.as_deref().unwrap_or("unnamed"),
            project.root.display()
        );
    }

    let config = WatchConfig {
        projects,
        ..Default::default()
    };
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write '{}'", config_path.display()))?;
    info!("Created config: {}", config_path.display());

    println!("\n✅ Wrote {}", config_path.display());
    println!("   Review the output_dir of each project, then run 'hotcopy watch'.");

    Ok(())
}

/// Every directory under `root` owning a .csproj becomes a candidate
/// project, rooted at the manifest's directory.
fn discover_projects(root: &Path) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|e| e.to_str()) != Some("csproj") {
            continue;
        }

        let Some(project_dir) = entry.path().parent() else {
            continue;
        };
        debug!("Found project manifest: {}", entry.path().display());

        let name = system_name_from_description(project_dir).or_else(|| {
            entry
                .path()
                .file_stem()
                .map(|n| n.to_string_lossy().into_owned())
        });

        let relative_root = project_dir
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| project_dir.to_path_buf());

        projects.push(ProjectEntry {
            name,
            root: relative_root,
            output_dir: PathBuf::from("bin/Debug"),
            copy_to_output: true,
        });
    }

    projects.sort_by(|a, b| a.root.cmp(&b.root));
    projects
}

/// The `SystemName:` line of a plugin's Description.txt, when present.
fn system_name_from_description(project_dir: &Path) -> Option<String> {
    let contents = fs::read_to_string(project_dir.join(DESCRIPTION_FILE)).ok()?;

    contents.lines().find_map(|line| {
        line.strip_prefix(SYSTEM_NAME_PREFIX)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_projects_by_manifest() {
        let temp = TempDir::new().unwrap();
        let payments = temp.path().join("Plugins/Payments.Stripe");
        fs::create_dir_all(&payments).unwrap();
        fs::write(payments.join("Payments.Stripe.csproj"), "<Project/>").unwrap();
        fs::write(
            payments.join("Description.txt"),
            "Group: Payment methods\nSystemName: Payments.Stripe\nFriendlyName: Stripe\n",
        )
        .unwrap();

        let widgets = temp.path().join("Plugins/Widgets.Banner");
        fs::create_dir_all(&widgets).unwrap();
        fs::write(widgets.join("Widgets.Banner.csproj"), "<Project/>").unwrap();

        let projects = discover_projects(temp.path());
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name.as_deref(), Some("Payments.Stripe"));
        assert_eq!(projects[0].root, PathBuf::from("Plugins/Payments.Stripe"));
        // No Description.txt: falls back to the manifest name.
        assert_eq!(projects[1].name.as_deref(), Some("Widgets.Banner"));
    }

    #[test]
    fn test_system_name_requires_prefix() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DESCRIPTION_FILE),
            "FriendlyName: Stripe\n",
        )
        .unwrap();
        assert_eq!(system_name_from_description(temp.path()), None);
    }
}

//! Integration tests for configuration loading, discovery, and the
//! registry built from a persisted config

use hotcopy::PluginFixture;
use hotcopy_core::config::{FilterMode, WatchConfig};
use hotcopy_core::{CopyPipeline, Outcome, ProjectRegistry, SavedFileEvent};
use serde_json::json;
use std::fs;

#[test]
fn test_config_discovered_from_nested_directory() {
    let fixture = PluginFixture::new("bin/Debug");
    let config_path = fixture.write_config("{}");
    let nested = fixture.project_root.join("Views/Shared");
    fs::create_dir_all(&nested).unwrap();

    let found = WatchConfig::find_config_file(&nested).unwrap();
    assert_eq!(found, config_path);
}

#[test]
fn test_loaded_config_drives_the_pipeline_end_to_end() {
    let fixture = PluginFixture::new("bin/Debug");
    let source = fixture.write_source("scripts/app.js", "console.log('v2');");
    fixture.write_output("scripts/app.js", "console.log('v1');");

    let config_json = json!({
        "filter_mode": "whitelist",
        "extensions": [".js", ".css"],
        "projects": [{ "root": "proj", "output_dir": "bin/Debug" }]
    });
    let config_path = fixture.write_config(&config_json.to_string());

    let config = WatchConfig::load_from_file(&config_path).unwrap();
    let base_dir = config_path.parent().unwrap();
    let mut pipeline = CopyPipeline::new(ProjectRegistry::from_config(&config, base_dir));

    let result = pipeline.process(&SavedFileEvent::new(&source), &config);

    assert_eq!(result.outcome, Outcome::Copied);
    assert_eq!(
        fs::read_to_string(fixture.output_path("scripts/app.js")).unwrap(),
        "console.log('v2');"
    );
}

#[test]
fn test_extension_tokens_normalize_on_load() {
    let fixture = PluginFixture::new("bin/Debug");
    let config_path = fixture.write_config(r#"{ "extensions": ["JS", ".Css", "js"] }"#);

    let config = WatchConfig::load_from_file(&config_path).unwrap();
    assert_eq!(config.extensions, vec![".js", ".css"]);
}

#[test]
fn test_blacklist_mode_round_trips_through_file() {
    let fixture = PluginFixture::new("bin/Debug");
    let config_path = fixture.write_config(
        r#"{ "filter_mode": "blacklist", "extensions": [".min.js"], "enabled": false }"#,
    );

    let config = WatchConfig::load_from_file(&config_path).unwrap();
    assert_eq!(config.filter_mode, FilterMode::Blacklist);
    assert!(!config.enabled);

    // And writing it back preserves both.
    let out_path = fixture.solution_root().join("roundtrip.json");
    config.save_to_file(&out_path).unwrap();
    let reloaded = WatchConfig::load_from_file(&out_path).unwrap();
    assert_eq!(reloaded.filter_mode, FilterMode::Blacklist);
    assert!(!reloaded.enabled);
}

#[test]
fn test_malformed_config_is_an_error_not_a_panic() {
    let fixture = PluginFixture::new("bin/Debug");
    let config_path = fixture.write_config("{ not json");

    let err = WatchConfig::load_from_file(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_registry_ignores_files_outside_registered_projects() {
    let fixture = PluginFixture::new("bin/Debug");
    let config_path = fixture.write_config(
        r#"{ "projects": [{ "root": "proj", "output_dir": "bin/Debug" }] }"#,
    );
    let stray = fixture.solution_root().join("stray.js");
    fs::write(&stray, "x").unwrap();

    let config = WatchConfig::load_from_file(&config_path).unwrap();
    let base_dir = config_path.parent().unwrap();
    let mut pipeline = CopyPipeline::new(ProjectRegistry::from_config(&config, base_dir));

    let result = pipeline.process(&SavedFileEvent::new(&stray), &config);
    assert_eq!(result.outcome, Outcome::Failed);
    assert!(
        result
            .failure_reason
            .as_deref()
            .unwrap()
            .contains("no watched project")
    );
}

use serde::{Deserialize, Serialize};

/// Whether the configured extension set names files to include or to
/// exclude from copying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Whitelist,
    Blacklist,
}

/// Normalize a configured extension to its canonical token form:
/// leading dot, ASCII lowercase ("JS" -> ".js", ".Css" -> ".css").
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_ascii_lowercase())
}

/// Decide whether a file with extension `ext` passes the filter.
///
/// Whitelist and blacklist are symmetric: membership is required under
/// whitelist and disqualifies under blacklist.
pub fn extension_passes(mode: FilterMode, extensions: &[String], ext: &str) -> bool {
    let listed = extensions.iter().any(|e| e == ext);
    match mode {
        FilterMode::Whitelist => listed,
        FilterMode::Blacklist => !listed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed() -> Vec<String> {
        vec![".js".to_string(), ".css".to_string()]
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("js"), ".js");
        assert_eq!(normalize_extension(".js"), ".js");
        assert_eq!(normalize_extension("JS"), ".js");
        assert_eq!(normalize_extension(" .Cshtml "), ".cshtml");
    }

    #[test]
    fn test_whitelist_requires_membership() {
        assert!(extension_passes(FilterMode::Whitelist, &listed(), ".js"));
        assert!(!extension_passes(FilterMode::Whitelist, &listed(), ".txt"));
    }

    #[test]
    fn test_blacklist_disqualifies_membership() {
        assert!(!extension_passes(FilterMode::Blacklist, &listed(), ".js"));
        assert!(extension_passes(FilterMode::Blacklist, &listed(), ".txt"));
    }
}

use std::path::{Path, PathBuf};

/// A single "file saved" notification.
///
/// Constructed per notification and discarded once the copy decision has
/// been emitted. The owning project is resolved separately through a
/// [`ProjectMetadataProvider`](crate::interfaces::ProjectMetadataProvider),
/// keeping the event itself host-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFileEvent {
    pub source_path: PathBuf,
}

impl SavedFileEvent {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
        }
    }

    /// The file extension of the saved file, with leading dot, lowercased.
    /// `None` when the file has no extension.
    pub fn extension(&self) -> Option<String> {
        extension_token(&self.source_path)
    }
}

/// Extract the extension of `path` as a normalized token (".js", ".css").
pub fn extension_token(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_token() {
        assert_eq!(
            extension_token(Path::new("/proj/scripts/app.js")),
            Some(".js".to_string())
        );
        assert_eq!(
            extension_token(Path::new("/proj/Views/Index.CSHTML")),
            Some(".cshtml".to_string())
        );
        assert_eq!(extension_token(Path::new("/proj/Makefile")), None);
        assert_eq!(extension_token(Path::new("/proj/.gitignore")), None);
    }

    #[test]
    fn test_event_extension() {
        let event = SavedFileEvent::new("/proj/content/site.Css");
        assert_eq!(event.extension(), Some(".css".to_string()));
    }
}

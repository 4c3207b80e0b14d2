pub mod copy_result;
pub mod project;
pub mod saved_file;

// Re-export commonly used types
pub use copy_result::{CopyResult, Outcome};
pub use project::ProjectMetadata;
pub use saved_file::SavedFileEvent;

//! Seams between the copy pipeline and its host
//!
//! The pipeline itself is host-agnostic: whoever embeds it (a file watcher,
//! an IDE adapter, a test) supplies project metadata through
//! [`ProjectMetadataProvider`] and consumes outcomes through [`ResultSink`].

pub mod metadata_provider;
pub mod result_sink;

pub use metadata_provider::ProjectMetadataProvider;
pub use result_sink::{FnSink, ResultSink};

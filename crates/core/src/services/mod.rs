//! Default implementations of the host seams

pub mod project_registry;

pub use project_registry::ProjectRegistry;

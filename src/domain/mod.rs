//! Domain models for depfold
//!
//! Pure value types describing what gets copied where. They carry no I/O.

pub mod artifact;
pub mod dependency;

pub use artifact::{ARTIFACT_RULES, ArtifactRule, Category, Variant};
pub use dependency::DependencyDescriptor;

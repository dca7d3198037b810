//! Core data model: build settings, dependencies and generator revisions.

pub mod dependency;
pub mod input;
pub mod revision;
pub mod settings;

pub use dependency::{DependencyInfo, DependencyList};
pub use input::GenerationInput;
pub use revision::Capabilities;
pub use settings::{BuildSettings, EnvOverrides, GeneratorOptions, PackageInfo};

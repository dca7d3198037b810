//! jamgen - Boost.Build (b2) configuration generator
//!
//! This crate maps a target platform, a compiler and a resolved dependency
//! list onto the documents b2 reads: `jamroot`, `project-config.jam` and
//! their support files.

pub mod builder;
pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

/// Test utilities and mocks for jamgen unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock toolchain prober and generation input
/// fixtures.
#[cfg(test)]
pub mod test_support;

pub use builder::{Generator, OutputDocuments};
pub use crate::core::{BuildSettings, Capabilities, DependencyInfo, GenerationInput};
pub use resolver::{FlagTokens, PlatformFlagResolver, ResolveError};
pub use util::Config;

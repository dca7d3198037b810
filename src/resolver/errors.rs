//! Resolution error types and diagnostics.

use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// A setting outside the supported value sets.
///
/// There is no valid b2 configuration for an unsupported platform, so these
/// abort generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unsupported operating system `{0}`")]
    UnsupportedOs(String),

    #[error("unsupported architecture `{0}`")]
    UnsupportedArch(String),

    #[error("unsupported compiler `{0}`")]
    UnsupportedCompiler(String),

    #[error("required dependency `{0}` is missing")]
    MissingDependency(String),
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());
        match self {
            ResolveError::UnsupportedOs(_) => diag
                .with_context(format!("supported: {}", super::platform::SUPPORTED_OS.join(", ")))
                .with_suggestion(suggestions::UNSUPPORTED_SETTING),
            ResolveError::UnsupportedArch(_) => diag
                .with_context(format!(
                    "supported: {}",
                    super::platform::SUPPORTED_ARCH.join(", ")
                ))
                .with_suggestion(suggestions::UNSUPPORTED_SETTING),
            ResolveError::UnsupportedCompiler(_) => diag
                .with_context(format!(
                    "supported: {}",
                    super::platform::SUPPORTED_COMPILERS.join(", ")
                ))
                .with_suggestion(suggestions::UNSUPPORTED_SETTING),
            ResolveError::MissingDependency(name) => diag.with_suggestion(format!(
                "help: Add a `[[dependencies]]` entry named `{}`",
                name
            )),
        }
    }
}

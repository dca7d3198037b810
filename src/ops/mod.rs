//! High-level operations.
//!
//! This module contains the implementation of jamgen commands.

pub mod context;
pub mod flags;
pub mod generate;

pub use context::{ContextOptions, GenerationContext};
pub use flags::{
    detect_toolchain, format_tokens, format_toolchain_report, resolve_flags, ToolchainReport,
};
pub use generate::{generate, write_documents, GenerateOptions, GenerateResult};

//! Command implementations

pub mod completions;
pub mod flags;
pub mod generate;
pub mod toolchain;

use std::path::PathBuf;

use anyhow::{bail, Result};

use jamgen::core::input::INPUT_FILE_NAME;
use jamgen::util::diagnostic::suggestions;

use crate::cli::InputArgs;

/// The generation input file, which must exist.
pub fn input_path(args: &InputArgs) -> Result<PathBuf> {
    let path = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(INPUT_FILE_NAME));

    if !path.is_file() {
        bail!(
            "generation input `{}` not found\n\n{}",
            path.display(),
            suggestions::NO_INPUT
        );
    }

    Ok(path)
}

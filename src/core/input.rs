//! The generation input file (`jamgen.toml`).
//!
//! ```toml
//! [package]
//! name = "boost_system"
//! version = "1.69.0"
//! lib_short_names = ["system"]
//!
//! [settings]
//! os = "Linux"
//! arch = "x86_64"
//! compiler = "gcc"
//! compiler_version = "9"
//! build_type = "Release"
//! libcxx = "libstdc++11"
//!
//! [options]
//! use_zlib = true
//!
//! [[dependencies]]
//! name = "zlib"
//! root_path = "deps/zlib"
//! libs = ["z"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::dependency::{DependencyInfo, DependencyList};
use super::settings::{BuildSettings, GeneratorOptions, PackageInfo};

/// Default name of the generation input file.
pub const INPUT_FILE_NAME: &str = "jamgen.toml";

/// Everything one generation pass needs from the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationInput {
    pub package: PackageInfo,
    pub settings: BuildSettings,
    #[serde(default)]
    pub options: GeneratorOptions,
    #[serde(default)]
    pub dependencies: Vec<DependencyInfo>,
}

impl GenerationInput {
    /// Parse an input document. Relative dependency roots stay relative.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load an input file, anchoring relative dependency roots at the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read generation input: {}", path.display()))?;

        let mut input = Self::parse(&contents)
            .with_context(|| format!("failed to parse generation input: {}", path.display()))?;

        let base = input_dir(path);
        for dep in &mut input.dependencies {
            dep.anchor(&base);
        }

        Ok(input)
    }

    /// The dependency list, validated for unique names.
    pub fn dependency_list(&self) -> Result<DependencyList> {
        DependencyList::new(self.dependencies.clone())
    }
}

/// Directory containing the input file (the current directory for a bare
/// file name).
pub fn input_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

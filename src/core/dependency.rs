//! Resolved dependency information.
//!
//! The host package manager resolves the graph; jamgen only consumes the
//! result as an ordered list. Order matters for include-path ordering and
//! for the order of `use-project` declarations in the jamroot.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// The file that marks a dependency lib dir as a prebuilt b2 project.
pub const PROJECT_FILE: &str = "jamroot.jam";

/// One resolved dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInfo {
    /// Package name, unique within the list
    pub name: String,

    /// Package root; relative dirs below are resolved against it
    pub root_path: PathBuf,

    /// Include directories, in declaration order
    #[serde(default = "default_include_dirs")]
    pub include_dirs: Vec<PathBuf>,

    /// Library directories, in declaration order
    #[serde(default = "default_lib_dirs")]
    pub lib_dirs: Vec<PathBuf>,

    /// Library names (e.g. `z`, `libbz2.lib`)
    #[serde(default)]
    pub libs: Vec<String>,

    /// Short names the b2 project exposes (`LIBRARY_DIR(<name>)`)
    #[serde(default)]
    pub short_names: Option<Vec<String>>,

    /// Free-form values published by the dependency
    #[serde(default)]
    pub user_info: BTreeMap<String, String>,
}

fn default_include_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("include")]
}

fn default_lib_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("lib")]
}

impl DependencyInfo {
    /// Create a dependency with the conventional `include`/`lib` layout.
    pub fn new(name: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        DependencyInfo {
            name: name.into(),
            root_path: root_path.into(),
            include_dirs: default_include_dirs(),
            lib_dirs: default_lib_dirs(),
            libs: Vec::new(),
            short_names: None,
            user_info: BTreeMap::new(),
        }
    }

    /// Absolute include paths.
    pub fn include_paths(&self) -> Vec<PathBuf> {
        self.include_dirs
            .iter()
            .map(|d| self.root_path.join(d))
            .collect()
    }

    /// Absolute library paths.
    pub fn lib_paths(&self) -> Vec<PathBuf> {
        self.lib_dirs.iter().map(|d| self.root_path.join(d)).collect()
    }

    /// Library paths that contain a prebuilt b2 project file.
    pub fn project_lib_paths(&self) -> Vec<PathBuf> {
        self.lib_paths()
            .into_iter()
            .filter(|dir| dir.join(PROJECT_FILE).is_file())
            .collect()
    }

    /// Short names declared by the dependency.
    ///
    /// Uses the explicit `short_names` list when present, otherwise the
    /// comma-separated `lib_short_names` user value.
    pub fn short_names(&self) -> Vec<String> {
        if let Some(ref names) = self.short_names {
            return names.clone();
        }
        self.user_value("lib_short_names")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Look up a user info value.
    pub fn user_value(&self, key: &str) -> Option<&str> {
        self.user_info.get(key).map(String::as_str)
    }

    /// File name of the first library, without any directory part.
    pub fn first_lib_name(&self) -> Option<String> {
        let lib = self.libs.first()?;
        Path::new(lib)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Resolve a relative root path against `base`.
    pub fn anchor(&mut self, base: &Path) {
        if self.root_path.is_relative() {
            self.root_path = base.join(&self.root_path);
        }
    }
}

/// Dependencies in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList {
    deps: Vec<DependencyInfo>,
}

impl DependencyList {
    /// Create a list, rejecting duplicate names.
    pub fn new(deps: Vec<DependencyInfo>) -> Result<Self> {
        let mut seen = HashSet::new();
        for dep in &deps {
            if !seen.insert(dep.name.as_str()) {
                bail!("dependency `{}` is listed more than once", dep.name);
            }
        }
        Ok(DependencyList { deps })
    }

    /// Look up a dependency by name.
    pub fn get(&self, name: &str) -> Option<&DependencyInfo> {
        self.deps.iter().find(|d| d.name == name)
    }

    /// Iterate in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyInfo> {
        self.deps.iter()
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// All include paths of all dependencies, in resolution order.
    pub fn include_paths(&self) -> Vec<PathBuf> {
        self.deps.iter().flat_map(|d| d.include_paths()).collect()
    }
}

impl<'a> IntoIterator for &'a DependencyList {
    type Item = &'a DependencyInfo;
    type IntoIter = std::slice::Iter<'a, DependencyInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.deps.iter()
    }
}

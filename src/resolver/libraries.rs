//! Flags for optional third-party libraries.
//!
//! Each library is gated by its `use_<name>` option and read from the
//! dependency of the same name. A disabled option or a missing dependency
//! yields empty tokens; neither is an error.

use crate::core::dependency::DependencyList;
use crate::core::settings::GeneratorOptions;
use crate::util::fs::{forward_slashes, quoted_paths};

use super::platform::Toolset;

/// Compression libraries configured in `project-config.jam`.
pub const COMPRESSION_LIBRARIES: [&str; 4] = ["zlib", "bzip2", "lzma", "zstd"];

/// Dependency publishing the Python toolchain.
pub const PYTHON_DEPENDENCY: &str = "python_dev_config";

/// Paths and library name of one optional library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFlags {
    /// Quoted library search paths
    pub lib_paths: String,
    /// Quoted include paths
    pub include_paths: String,
    /// File name of the first library
    pub name: String,
}

/// Flags for an optional library such as `zlib`.
pub fn optional_library(
    options: &GeneratorOptions,
    deps: &DependencyList,
    library: &str,
) -> LibraryFlags {
    if !options.uses(library) {
        return LibraryFlags::default();
    }
    let Some(dep) = deps.get(library) else {
        tracing::debug!("use_{} is set but `{}` is not a dependency", library, library);
        return LibraryFlags::default();
    };

    LibraryFlags {
        lib_paths: quoted_paths(dep.lib_paths()),
        include_paths: quoted_paths(dep.include_paths()),
        name: dep.first_lib_name().unwrap_or_default(),
    }
}

/// ICU library paths (`{{{libpath}}}`).
pub fn icu_lib_paths(options: &GeneratorOptions, deps: &DependencyList) -> String {
    optional_library(options, deps, "icu").lib_paths
}

/// Python toolchain locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PythonFlags {
    pub exec: String,
    pub version: String,
    pub include: String,
    pub lib: String,
}

/// Python locations published by the `python_dev_config` dependency.
///
/// MSVC links against the library directory, other toolsets against the
/// library file itself.
pub fn python_flags(deps: &DependencyList, toolset: Toolset) -> PythonFlags {
    let Some(dep) = deps.get(PYTHON_DEPENDENCY) else {
        return PythonFlags::default();
    };
    let value = |key: &str| dep.user_value(key).map(forward_slashes).unwrap_or_default();

    let lib_key = if toolset == Toolset::Msvc {
        "python_lib_dir"
    } else {
        "python_lib"
    };

    PythonFlags {
        exec: value("python_exec"),
        version: value("python_version"),
        include: value("python_include_dir"),
        lib: value(lib_key),
    }
}

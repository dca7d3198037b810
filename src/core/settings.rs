//! Build settings, generator options and environment overrides.
//!
//! These are read-only snapshots for the duration of one generation pass.
//! Optional host settings are `Option`s so the resolver can match on their
//! presence instead of treating a missing value as an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Platform and compiler description supplied by the host package manager.
///
/// Values use the package manager's vocabulary (`Linux`, `x86_64`,
/// `Visual Studio`, `apple-clang`, ...). They are mapped to b2 vocabulary by
/// the resolver, which rejects values outside the supported sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Target operating system (e.g. `Linux`, `Macos`, `Windows`)
    pub os: String,
    /// Target architecture (e.g. `x86_64`, `armv8`)
    pub arch: String,
    /// Compiler family (e.g. `gcc`, `clang`, `Visual Studio`)
    pub compiler: String,
    /// Compiler version as a dotted string (e.g. `9`, `9.3`, `15`)
    pub compiler_version: String,
    /// Build type (`Debug`, `Release`, ...)
    #[serde(default)]
    pub build_type: Option<String>,
    /// C++ standard library (`libstdc++`, `libstdc++11`, `libc++`)
    #[serde(default)]
    pub libcxx: Option<String>,
    /// MSVC runtime (`MD`, `MT`, `MDd`, `MTd`)
    #[serde(default)]
    pub runtime: Option<String>,
    /// Threading model (`posix`, `win32`)
    #[serde(default)]
    pub threads: Option<String>,
}

/// Options of the package being generated for.
///
/// Every field is optional; an absent value means "off" (or "default" for
/// string options).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Build shared libraries
    pub shared: Option<bool>,
    pub use_zlib: Option<bool>,
    pub use_bzip2: Option<bool>,
    pub use_lzma: Option<bool>,
    pub use_zstd: Option<bool>,
    pub use_icu: Option<bool>,
    /// Thread API override (`pthread`, `win32`, or `default`)
    pub threadapi: Option<String>,
    /// MPI compiler wrapper
    pub mpicxx: Option<String>,
}

impl GeneratorOptions {
    /// Whether shared linking was requested.
    pub fn is_shared(&self) -> bool {
        self.shared.unwrap_or(false)
    }

    /// Whether the named optional library is enabled (`use_<name>`).
    pub fn uses(&self, library: &str) -> bool {
        let flag = match library {
            "zlib" => self.use_zlib,
            "bzip2" => self.use_bzip2,
            "lzma" => self.use_lzma,
            "zstd" => self.use_zstd,
            "icu" => self.use_icu,
            _ => None,
        };
        flag.unwrap_or(false)
    }
}

/// The package the documents are generated for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Package name (`{{{name}}}`)
    pub name: String,
    /// Package version (`{{{boost_version}}}`); the generator revision is
    /// chosen separately
    pub version: String,
    /// Libraries to build (`{{{libraries}}}`)
    #[serde(default)]
    pub lib_short_names: Vec<String>,
}

/// Environment variables that override compiler and tool selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub cxx: Option<String>,
    pub cflags: Option<String>,
    pub cxxflags: Option<String>,
    pub ldflags: Option<String>,
    pub sysroot: Option<String>,
    pub ar: Option<String>,
    pub ranlib: Option<String>,
    pub strip: Option<String>,
}

impl EnvOverrides {
    /// The variables read from the environment.
    pub const VARIABLES: [&'static str; 8] = [
        "CXX", "CFLAGS", "CXXFLAGS", "LDFLAGS", "SYSROOT", "AR", "RANLIB", "STRIP",
    ];

    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            Self::VARIABLES
                .iter()
                .filter_map(|&key| std::env::var(key).ok().map(|v| (key.to_string(), v))),
        )
    }

    /// Build overrides from explicit key/value pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        EnvOverrides {
            cxx: map.remove("CXX"),
            cflags: map.remove("CFLAGS"),
            cxxflags: map.remove("CXXFLAGS"),
            ldflags: map.remove("LDFLAGS"),
            sysroot: map.remove("SYSROOT"),
            ar: map.remove("AR"),
            ranlib: map.remove("RANLIB"),
            strip: map.remove("STRIP"),
        }
    }

    /// Iterate over the variables that are set.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let values = [
            &self.cxx,
            &self.cflags,
            &self.cxxflags,
            &self.ldflags,
            &self.sysroot,
            &self.ar,
            &self.ranlib,
            &self.strip,
        ];
        Self::VARIABLES
            .into_iter()
            .zip(values)
            .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_absent_means_off() {
        let options = GeneratorOptions::default();
        assert!(!options.is_shared());
        assert!(!options.uses("zlib"));
        assert!(!options.uses("unknown"));
    }

    #[test]
    fn test_options_uses() {
        let options = GeneratorOptions {
            use_zlib: Some(true),
            use_bzip2: Some(false),
            ..Default::default()
        };
        assert!(options.uses("zlib"));
        assert!(!options.uses("bzip2"));
    }

    #[test]
    fn test_env_overrides_from_vars() {
        let env = EnvOverrides::from_vars([("CXX", "clang++-10"), ("AR", "llvm-ar"), ("HOME", "/root")]);
        assert_eq!(env.cxx.as_deref(), Some("clang++-10"));
        assert_eq!(env.ar.as_deref(), Some("llvm-ar"));
        assert!(env.cflags.is_none());

        let set: Vec<_> = env.iter().collect();
        assert_eq!(set, vec![("CXX", "clang++-10"), ("AR", "llvm-ar")]);
    }
}

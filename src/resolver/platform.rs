//! Platform and toolset tables.
//!
//! Maps host package manager settings to b2 vocabulary. Unknown operating
//! systems, architectures and compilers fail fast; everything else here is
//! total.

use super::errors::ResolveError;

/// b2 sentinel meaning "let b2 choose".
pub const DEFAULT_TOKEN: &str = "$(DEFAULT)";

pub const SUPPORTED_OS: [&str; 7] =
    ["Windows", "Linux", "Macos", "Android", "iOS", "FreeBSD", "SunOS"];

pub const SUPPORTED_ARCH: [&str; 8] = [
    "x86", "x86_64", "ppc64le", "ppc64", "armv6", "armv7", "armv7hf", "armv8",
];

pub const SUPPORTED_COMPILERS: [&str; 4] = ["gcc", "Visual Studio", "clang", "apple-clang"];

/// Target operating system in b2 terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOs {
    Windows,
    Linux,
    Darwin,
    Android,
    Iphone,
    FreeBsd,
    Solaris,
}

impl TargetOs {
    /// Map a host `os` setting.
    pub fn from_setting(os: &str) -> Result<Self, ResolveError> {
        match os {
            "Windows" => Ok(TargetOs::Windows),
            "Linux" => Ok(TargetOs::Linux),
            "Macos" => Ok(TargetOs::Darwin),
            "Android" => Ok(TargetOs::Android),
            "iOS" => Ok(TargetOs::Iphone),
            "FreeBSD" => Ok(TargetOs::FreeBsd),
            "SunOS" => Ok(TargetOs::Solaris),
            other => Err(ResolveError::UnsupportedOs(other.to_string())),
        }
    }

    /// The b2 `target-os` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetOs::Windows => "windows",
            TargetOs::Linux => "linux",
            TargetOs::Darwin => "darwin",
            TargetOs::Android => "android",
            TargetOs::Iphone => "iphone",
            TargetOs::FreeBsd => "freebsd",
            TargetOs::Solaris => "solaris",
        }
    }

    /// macOS or iOS.
    pub fn is_apple(&self) -> bool {
        matches!(self, TargetOs::Darwin | TargetOs::Iphone)
    }

    /// Systems whose compilers are found by versioned executable name.
    pub fn is_posix_like(&self) -> bool {
        matches!(
            self,
            TargetOs::Linux
                | TargetOs::FreeBsd
                | TargetOs::Solaris
                | TargetOs::Darwin
                | TargetOs::Android
        )
    }
}

impl std::fmt::Display for TargetOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// b2 toolset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toolset {
    Gcc,
    Msvc,
    Clang,
}

impl Toolset {
    /// Map a host `compiler` setting.
    pub fn from_setting(compiler: &str) -> Result<Self, ResolveError> {
        match compiler {
            "gcc" => Ok(Toolset::Gcc),
            "Visual Studio" => Ok(Toolset::Msvc),
            "clang" | "apple-clang" => Ok(Toolset::Clang),
            other => Err(ResolveError::UnsupportedCompiler(other.to_string())),
        }
    }

    /// The b2 toolset name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Toolset::Gcc => "gcc",
            Toolset::Msvc => "msvc",
            Toolset::Clang => "clang",
        }
    }

    /// GCC and Clang share flag syntax.
    pub fn is_gnu_like(&self) -> bool {
        matches!(self, Toolset::Gcc | Toolset::Clang)
    }

    /// Stem of the versioned executable candidates: the toolset name, with
    /// `gcc` spelled as its C++ driver `g++`.
    pub fn exec_stem(&self) -> &'static str {
        match self {
            Toolset::Gcc => "g++",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for Toolset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `address-model` for an architecture.
pub fn address_model(arch: &str) -> Result<&'static str, ResolveError> {
    match arch {
        "x86" | "armv6" | "armv7" | "armv7hf" => Ok("32"),
        "x86_64" | "ppc64le" | "ppc64" | "armv8" => Ok("64"),
        other => Err(ResolveError::UnsupportedArch(other.to_string())),
    }
}

/// `architecture` family, empty when unknown.
pub fn architecture(arch: &str) -> &'static str {
    if arch.starts_with("x86") {
        "x86"
    } else if arch.starts_with("ppc") {
        "power"
    } else if arch.starts_with("arm") {
        "arm"
    } else {
        ""
    }
}

/// `variant`: exactly `Debug` selects debug.
pub fn variant(build_type: Option<&str>) -> &'static str {
    match build_type {
        Some("Debug") => "debug",
        _ => "release",
    }
}

/// Toolset version as b2 expects it.
///
/// MSVC 15 (Visual Studio 2017) ships toolset 14.1; other MSVC versions map
/// to `<version>.0`. Non-MSVC toolsets leave the choice to b2.
pub fn toolset_version(toolset: Toolset, compiler_version: &str) -> String {
    match toolset {
        Toolset::Msvc if compiler_version == "15" => "14.1".to_string(),
        Toolset::Msvc => format!("{}.0", compiler_version),
        _ => DEFAULT_TOKEN.to_string(),
    }
}

/// Architecture name understood by Apple's `-arch`.
pub fn apple_arch(arch: &str) -> Option<&'static str> {
    match arch {
        "armv7" => Some("armv7"),
        "armv8" => Some("arm64"),
        "x86" => Some("i386"),
        "x86_64" => Some("x86_64"),
        _ => None,
    }
}

/// SDK name for `xcrun -sdk`.
pub fn apple_sdk(os: TargetOs, arch: &str) -> Option<&'static str> {
    match os {
        TargetOs::Darwin => Some("macosx"),
        TargetOs::Iphone if arch.starts_with("x86") => Some("iphonesimulator"),
        TargetOs::Iphone if arch.starts_with("arm") => Some("iphoneos"),
        _ => None,
    }
}

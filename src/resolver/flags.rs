//! Conditional flag selection.
//!
//! Each function computes one token from already-mapped platform values.
//! The flag strings are b2 property literals.

use crate::core::settings::EnvOverrides;

use super::platform::{apple_arch, TargetOs, Toolset, DEFAULT_TOKEN};

/// Library linkage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Static,
    Shared,
}

impl Link {
    pub fn from_shared(shared: bool) -> Self {
        if shared {
            Link::Shared
        } else {
            Link::Static
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Link::Static => "static",
            Link::Shared => "shared",
        }
    }
}

/// `runtime-link`: static for the MSVC `MT` runtimes, otherwise b2's default.
pub fn runtime_link(toolset: Toolset, runtime: Option<&str>) -> &'static str {
    match (toolset, runtime) {
        (Toolset::Msvc, Some(rt)) if rt.contains("MT") => "static",
        _ => DEFAULT_TOKEN,
    }
}

/// C++11 language flags, unless targeting the pre-C++11 libstdc++ ABI.
pub fn cxxstd(toolset: Toolset, os: TargetOs, libcxx: Option<&str>) -> &'static str {
    if toolset.is_gnu_like() && os != TargetOs::Android && libcxx != Some("libstdc++") {
        "<cxxflags>-std=c++11 <linkflags>-std=c++11"
    } else {
        ""
    }
}

/// Define selecting the libstdc++ dual ABI.
pub fn cxxabi(toolset: Toolset, os: TargetOs, libcxx: Option<&str>) -> &'static str {
    if !toolset.is_gnu_like() || os == TargetOs::Android {
        return "";
    }
    match libcxx {
        Some("libstdc++11") => "<define>_GLIBCXX_USE_CXX11_ABI=1",
        Some("libstdc++") => "<define>_GLIBCXX_USE_CXX11_ABI=0",
        _ => "",
    }
}

/// Clang standard library selection.
pub fn libcxx(toolset: Toolset, os: TargetOs, libcxx: Option<&str>) -> &'static str {
    if toolset != Toolset::Clang || os == TargetOs::Android {
        return "";
    }
    match libcxx {
        Some("libc++") => "<cxxflags>-stdlib=libc++ <linkflags>-stdlib=libc++",
        Some("libstdc++") | Some("libstdc++11") => {
            "<cxxflags>-stdlib=libstdc++ <linkflags>-stdlib=libstdc++"
        }
        _ => "",
    }
}

/// Position-independent code for static GCC/Clang builds off Windows.
pub fn fpic(os: TargetOs, toolset: Toolset, link: Link) -> &'static str {
    if os != TargetOs::Windows && toolset.is_gnu_like() && link == Link::Static {
        "<flags>-fPIC\n<cxxflags>-fPIC"
    } else {
        ""
    }
}

/// `-arch` flags for Apple targets.
pub fn arch_flags(os: TargetOs, arch: &str) -> String {
    if !os.is_apple() {
        return String::new();
    }
    match apple_arch(arch) {
        Some(a) => format!("<flags>\"-arch {0}\" <linkflags>\"-arch {0}\"", a),
        None => String::new(),
    }
}

/// `-isysroot` flag for an SDK path.
pub fn isysroot(sdk_path: Option<&str>) -> String {
    sdk_path
        .map(|p| format!("<flags>\"-isysroot {}\"", p))
        .unwrap_or_default()
}

/// Thread API: explicit option, then the `threads` setting, then the OS.
pub fn threadapi(option: Option<&str>, threads: Option<&str>, os: TargetOs) -> String {
    if let Some(api) = option.filter(|a| *a != "default") {
        return api.to_string();
    }
    match threads {
        Some("posix") => "pthread".to_string(),
        Some("win32") => "win32".to_string(),
        _ if os == TargetOs::Windows => "win32".to_string(),
        _ => "pthread".to_string(),
    }
}

/// Compiler and linker flags from `CFLAGS`, `CXXFLAGS` and `LDFLAGS`.
pub fn profile_flags(toolset: Toolset, env: &EnvOverrides) -> String {
    if !toolset.is_gnu_like() {
        return String::new();
    }
    [
        ("<cflags>", &env.cflags),
        ("<cxxflags>", &env.cxxflags),
        ("<linkflags>", &env.ldflags),
    ]
    .into_iter()
    .filter_map(|(feature, value)| value.as_ref().map(|v| format!("{}\"{}\"", feature, v)))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Toolset options from `SYSROOT`, `AR`, `RANLIB` and (Apple) `STRIP`.
///
/// Rendered after the toolset executable in `using`, hence the `: ` prefix.
pub fn profile_tools(toolset: Toolset, os: TargetOs, env: &EnvOverrides) -> String {
    if !toolset.is_gnu_like() {
        return String::new();
    }
    let strip = env.strip.as_ref().filter(|_| os.is_apple());

    let tools = [
        ("<root>", env.sysroot.as_ref()),
        ("<archiver>", env.ar.as_ref()),
        ("<ranlib>", env.ranlib.as_ref()),
        ("<striper>", strip),
    ]
    .into_iter()
    .filter_map(|(feature, value)| value.map(|v| format!("{}\"{}\"", feature, v)))
    .collect::<Vec<_>>()
    .join(" ");

    if tools.is_empty() {
        tools
    } else {
        format!(": {}", tools)
    }
}

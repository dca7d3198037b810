//! Generation inputs for common test scenarios.

use std::path::Path;

use crate::core::dependency::DependencyInfo;
use crate::core::input::GenerationInput;
use crate::core::settings::{BuildSettings, GeneratorOptions, PackageInfo};

/// `boost_system` 1.69.0 with no options.
pub fn package() -> PackageInfo {
    PackageInfo {
        name: "boost_system".to_string(),
        version: "1.69.0".to_string(),
        lib_short_names: vec!["system".to_string()],
    }
}

/// Linux, x86_64, gcc 9, Release, static, no dependencies.
pub fn linux_gcc_input() -> GenerationInput {
    GenerationInput {
        package: package(),
        settings: BuildSettings {
            os: "Linux".to_string(),
            arch: "x86_64".to_string(),
            compiler: "gcc".to_string(),
            compiler_version: "9".to_string(),
            build_type: Some("Release".to_string()),
            libcxx: Some("libstdc++11".to_string()),
            runtime: None,
            threads: None,
        },
        options: GeneratorOptions::default(),
        dependencies: Vec::new(),
    }
}

/// Windows, x86_64, Visual Studio 15, Debug, `MTd` runtime.
pub fn windows_msvc_input() -> GenerationInput {
    GenerationInput {
        package: package(),
        settings: BuildSettings {
            os: "Windows".to_string(),
            arch: "x86_64".to_string(),
            compiler: "Visual Studio".to_string(),
            compiler_version: "15".to_string(),
            build_type: Some("Debug".to_string()),
            libcxx: None,
            runtime: Some("MTd".to_string()),
            threads: None,
        },
        options: GeneratorOptions::default(),
        dependencies: Vec::new(),
    }
}

/// macOS, armv8, apple-clang 12.0, Release, libc++.
pub fn macos_clang_input() -> GenerationInput {
    GenerationInput {
        package: package(),
        settings: BuildSettings {
            os: "Macos".to_string(),
            arch: "armv8".to_string(),
            compiler: "apple-clang".to_string(),
            compiler_version: "12.0".to_string(),
            build_type: Some("Release".to_string()),
            libcxx: Some("libc++".to_string()),
            runtime: None,
            threads: None,
        },
        options: GeneratorOptions::default(),
        dependencies: Vec::new(),
    }
}

/// A dependency whose `lib` directory under `root` holds a prebuilt
/// `jamroot.jam`.
pub fn jam_project(root: &Path, name: &str, short_names: &[&str]) -> DependencyInfo {
    let mut dep = DependencyInfo::new(name, root);
    dep.libs = short_names.iter().map(|s| format!("boost_{}", s)).collect();
    dep.short_names = Some(short_names.iter().map(|s| s.to_string()).collect());

    let lib_dir = root.join("lib");
    std::fs::create_dir_all(&lib_dir).unwrap();
    std::fs::write(
        lib_dir.join(crate::core::dependency::PROJECT_FILE),
        format!("project {} ;\n", name),
    )
    .unwrap();
    dep
}

/// The `boost_build` dependency carrying the b2 installation.
pub fn boost_build(root: &Path) -> DependencyInfo {
    DependencyInfo::new("boost_build", root)
}

/// A generation input file with a zlib dependency, as written by a host.
pub const LINUX_INPUT_TOML: &str = r#"[package]
name = "boost_system"
version = "1.69.0"
lib_short_names = ["system"]

[settings]
os = "Linux"
arch = "x86_64"
compiler = "gcc"
compiler_version = "9"
build_type = "Release"
libcxx = "libstdc++11"

[options]
use_zlib = true

[[dependencies]]
name = "zlib"
root_path = "deps/zlib"
libs = ["z"]
"#;

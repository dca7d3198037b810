//! CLI integration tests for jamgen.
//!
//! These tests run the binary against generation inputs written into a
//! temporary directory. Probing is disabled so results do not depend on the
//! compilers installed on the machine running the tests.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const LINUX_INPUT: &str = r#"[package]
name = "boost_system"
version = "1.69.0"
lib_short_names = ["system"]

[settings]
os = "Linux"
arch = "x86_64"
compiler = "gcc"
compiler_version = "9"
build_type = "Release"

[options]
use_zlib = true

[[dependencies]]
name = "zlib"
root_path = "deps/zlib"
libs = ["z"]
"#;

/// Get the jamgen binary command, isolated from the user's configuration.
fn jamgen(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jamgen").unwrap();
    cmd.env("HOME", home).env_remove("JAMGEN_TEMPLATE_DIR");
    for var in ["CXX", "CFLAGS", "CXXFLAGS", "LDFLAGS", "SYSROOT", "AR", "RANLIB", "STRIP"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a project directory holding `jamgen.toml`.
fn project(input: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("jamgen.toml"), input).unwrap();
    tmp
}

// ============================================================================
// jamgen generate
// ============================================================================

#[test]
fn test_generate_writes_all_documents() {
    let tmp = project(LINUX_INPUT);

    jamgen(tmp.path())
        .args(["generate", "--no-probe"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 4 files"));

    for name in ["jamroot", "project-config.jam", "boostcpp.jam", "short_path.cmd"] {
        assert!(tmp.path().join(name).is_file(), "{} missing", name);
    }

    let jamroot = fs::read_to_string(tmp.path().join("jamroot")).unwrap();
    assert!(jamroot.contains("<target-os>linux"));
    assert!(jamroot.contains("<address-model>64"));
    assert!(jamroot.contains("<variant>release"));
    assert!(jamroot.contains("<flags>-fPIC"));
    assert!(!jamroot.contains("{{{"));

    let project_config = fs::read_to_string(tmp.path().join("project-config.jam")).unwrap();
    assert!(project_config.contains("using gcc : $(DEFAULT) : $(DEFAULT)"));
    assert!(project_config.contains("<name>z"));

    let short_path = fs::read_to_string(tmp.path().join("short_path.cmd")).unwrap();
    assert_eq!(short_path, "@echo off\nECHO %~s1");
}

#[test]
fn test_generate_into_out_dir() {
    let tmp = project(LINUX_INPUT);
    let out = tmp.path().join("build").join("b2");

    jamgen(tmp.path())
        .args(["generate", "--no-probe", "--input"])
        .arg(tmp.path().join("jamgen.toml"))
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("jamroot").is_file());
    assert!(!tmp.path().join("jamroot").exists());
}

#[test]
fn test_generate_dry_run() {
    let tmp = project(LINUX_INPUT);

    jamgen(tmp.path())
        .args(["generate", "--no-probe", "--dry-run"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("==> "))
        .stdout(predicate::str::contains("<target-os>linux"));

    assert!(!tmp.path().join("jamroot").exists());
}

#[test]
fn test_generate_old_revision() {
    let input = format!(
        "{}\n[[dependencies]]\nname = \"boost_build\"\nroot_path = \"/opt/b2\"\n",
        LINUX_INPUT
    );
    let tmp = project(&input);

    jamgen(tmp.path())
        .args(["generate", "--no-probe", "--revision", "1.64.0"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let registration = fs::read_to_string(tmp.path().join("boost-build.jam")).unwrap();
    assert_eq!(registration, "boost-build \"/opt/b2/share/boost-build\" ;");
    let project_config = fs::read_to_string(tmp.path().join("project-config.jam")).unwrap();
    assert!(project_config.is_empty());
}

#[test]
fn test_generate_unsupported_os_fails() {
    let tmp = project(&LINUX_INPUT.replace("os = \"Linux\"", "os = \"Haiku\""));

    jamgen(tmp.path())
        .args(["generate", "--no-probe"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported operating system `Haiku`"))
        .stderr(predicate::str::contains("supported:"));

    assert!(!tmp.path().join("jamroot").exists());
}

#[test]
fn test_generate_missing_template_dir_fails() {
    let tmp = project(LINUX_INPUT);

    jamgen(tmp.path())
        .args(["generate", "--no-probe", "--template-dir"])
        .arg(tmp.path().join("no-templates"))
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read template"))
        .stderr(predicate::str::contains("--template-dir"));
}

#[test]
fn test_generate_without_input_fails() {
    let tmp = TempDir::new().unwrap();

    jamgen(tmp.path())
        .arg("generate")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("jamgen.toml"));
}

#[test]
fn test_project_config_file_is_honored() {
    let tmp = project(LINUX_INPUT);
    fs::create_dir_all(tmp.path().join(".jamgen")).unwrap();
    fs::write(
        tmp.path().join(".jamgen/config.toml"),
        "[generator]\nprobe = false\noutput_dir = \"out\"\n",
    )
    .unwrap();

    jamgen(tmp.path())
        .arg("generate")
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("out").join("jamroot").is_file());
}

// ============================================================================
// jamgen flags
// ============================================================================

#[test]
fn test_flags_json() {
    let tmp = project(LINUX_INPUT);

    let output = jamgen(tmp.path())
        .args(["flags", "--json", "--no-probe"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tokens["os"], "linux");
    assert_eq!(tokens["toolset"], "gcc");
    assert_eq!(tokens["toolset_exec"], "$(DEFAULT)");
    assert_eq!(tokens["zlib_name"], "z");
    assert_eq!(tokens["threading"], "multi");
}

#[test]
fn test_flags_text() {
    let tmp = project(LINUX_INPUT);

    jamgen(tmp.path())
        .args(["flags", "--no-probe"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("address_model = 64"))
        .stdout(predicate::str::contains("variant = release"));
}

#[test]
fn test_flags_unsupported_arch() {
    let tmp = project(&LINUX_INPUT.replace("arch = \"x86_64\"", "arch = \"sparc\""));

    jamgen(tmp.path())
        .args(["flags", "--no-probe"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported architecture `sparc`"));
}

// ============================================================================
// jamgen toolchain / completions
// ============================================================================

#[test]
fn test_toolchain_report() {
    let tmp = project(&LINUX_INPUT.replace(
        "compiler_version = \"9\"",
        "compiler_version = \"99.7\"",
    ));

    jamgen(tmp.path())
        .arg("toolchain")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("target: linux / gcc 99.7"))
        .stdout(predicate::str::contains("missing g++-997"))
        .stdout(predicate::str::contains("missing g++-99"));
}

#[test]
fn test_completions() {
    let tmp = TempDir::new().unwrap();

    jamgen(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jamgen"));
}

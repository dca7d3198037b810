//! Configuration file support for jamgen.
//!
//! jamgen supports two configuration file locations:
//! - Global: `~/.jamgen/config.toml` - User-wide defaults
//! - Project: `.jamgen/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// jamgen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generator settings
    pub generator: GeneratorConfig,
}

/// Generator-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding `jamroot.template`, `boostcpp.jam` and
    /// `project-config.template.jam`
    pub template_dir: Option<PathBuf>,

    /// Generator revision (Boost version) used to select capabilities
    pub revision: Option<String>,

    /// Whether to probe the local toolchain for the toolset executable
    pub probe: Option<bool>,

    /// Directory the documents are written to
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.generator.template_dir.is_some() {
            self.generator.template_dir = other.generator.template_dir;
        }
        if other.generator.revision.is_some() {
            self.generator.revision = other.generator.revision;
        }
        if other.generator.probe.is_some() {
            self.generator.probe = other.generator.probe;
        }
        if other.generator.output_dir.is_some() {
            self.generator.output_dir = other.generator.output_dir;
        }
    }

    /// Whether toolchain probing is enabled (defaults to true).
    pub fn probe_enabled(&self) -> bool {
        self.generator.probe.unwrap_or(true)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.jamgen/config.toml)
/// 2. Global config (~/.jamgen/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global jamgen config directory (~/.jamgen).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".jamgen"))
}

/// Get the global config path (~/.jamgen/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.jamgen/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".jamgen").join("config.toml")
}

/// Load the configuration that applies to a project rooted at `project_root`.
pub fn load_for_project(project_root: &Path) -> Config {
    let project_path = project_config_path(project_root);
    match global_config_path() {
        Some(global) => load_config(&global, &project_path),
        None => load_config(&PathBuf::new(), &project_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.generator.template_dir.is_none());
        assert!(config.generator.revision.is_none());
        assert!(config.probe_enabled());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[generator]
template_dir = "/opt/jamgen/templates"
revision = "1.66.0"
probe = false
output_dir = "build"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(
            config.generator.template_dir,
            Some(PathBuf::from("/opt/jamgen/templates"))
        );
        assert_eq!(config.generator.revision, Some("1.66.0".to_string()));
        assert!(!config.probe_enabled());
        assert_eq!(config.generator.output_dir, Some(PathBuf::from("build")));
    }

    #[test]
    fn test_config_load_invalid_falls_back() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[generator\nprobe = ").unwrap();

        assert!(Config::load(&config_path).is_err());
        let config = Config::load_or_default(&config_path);
        assert!(config.generator.revision.is_none());
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.generator.revision = Some("1.66.0".to_string());
        base.generator.probe = Some(false);

        let mut override_cfg = Config::default();
        override_cfg.generator.revision = Some("1.69.0".to_string());

        base.merge(override_cfg);

        assert_eq!(base.generator.revision, Some("1.69.0".to_string()));
        assert_eq!(base.generator.probe, Some(false)); // Not overridden
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            r#"
[generator]
template_dir = "/usr/share/jamgen"
revision = "1.66.0"
"#,
        )
        .unwrap();

        std::fs::write(
            &project_path,
            r#"
[generator]
revision = "1.69.0"
"#,
        )
        .unwrap();

        let config = load_config(&global_path, &project_path);

        assert_eq!(config.generator.revision, Some("1.69.0".to_string()));
        assert_eq!(
            config.generator.template_dir,
            Some(PathBuf::from("/usr/share/jamgen"))
        );
    }

    #[test]
    fn test_project_config_path() {
        let path = project_config_path(Path::new("/work/boost_system"));
        assert_eq!(path, PathBuf::from("/work/boost_system/.jamgen/config.toml"));
    }
}

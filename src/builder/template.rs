//! Template loading and placeholder substitution.
//!
//! Templates contain `{{{key}}}` placeholders. Substitution is literal and
//! runs over an explicit key list per document; placeholders not in the
//! list are left as they are.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resolver::FlagTokens;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Template for the root build script.
pub const JAMROOT_TEMPLATE: &str = "jamroot.template";

/// Template for the compiler configuration.
pub const PROJECT_CONFIG_TEMPLATE: &str = "project-config.template.jam";

/// b2 support file, copied through unchanged.
pub const BOOSTCPP_JAM: &str = "boostcpp.jam";

/// Environment variable overriding the template directory.
pub const TEMPLATE_DIR_ENV: &str = "JAMGEN_TEMPLATE_DIR";

/// Placeholders substituted in `jamroot`.
pub const JAMROOT_KEYS: &[&str] = &[
    "toolset",
    "libraries",
    "boost_version",
    "deps.include_paths",
    "os",
    "address_model",
    "architecture",
    "deps_info",
    "variant",
    "name",
    "link",
    "runtime_link",
    "toolset_version",
    "toolset_exec",
    "libcxx",
    "cxxstd",
    "cxxabi",
    "libpath",
    "arch_flags",
    "isysroot",
    "fpic",
    "threading",
    "threadapi",
    "profile_flags",
];

/// Placeholders substituted in `project-config.jam`.
pub const PROJECT_CONFIG_KEYS: &[&str] = &[
    "toolset",
    "toolset_version",
    "toolset_exec",
    "zlib_lib_paths",
    "zlib_include_paths",
    "zlib_name",
    "bzip2_lib_paths",
    "bzip2_include_paths",
    "bzip2_name",
    "lzma_lib_paths",
    "lzma_include_paths",
    "lzma_name",
    "zstd_lib_paths",
    "zstd_include_paths",
    "zstd_name",
    "python_exec",
    "python_version",
    "python_include",
    "python_lib",
    "mpicxx",
    "profile_tools",
];

/// A template that could not be loaded.
#[derive(Debug, Error)]
#[error("failed to read template: {}", .path.display())]
pub struct TemplateError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl TemplateError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string())
            .with_context(self.source.to_string())
            .with_location(self.path.clone())
            .with_suggestion(suggestions::MISSING_TEMPLATE)
    }
}

/// Substitute `{{{key}}}` for every key in `keys`.
///
/// Keys without a token render as empty.
pub fn render(template: &str, tokens: &FlagTokens, keys: &[&str]) -> String {
    let mut out = template.to_string();
    for key in keys {
        let placeholder = format!("{{{{{{{}}}}}}}", key);
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, tokens.get(key).unwrap_or_default());
        }
    }
    out
}

/// Template texts for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub jamroot: String,
    pub boostcpp: String,
    /// `None` when the revision has no `project-config.jam`
    pub project_config: Option<String>,
}

impl TemplateSet {
    /// Load the templates from `dir`.
    pub fn load(dir: &Path, needs_project_config: bool) -> Result<Self, TemplateError> {
        let project_config = if needs_project_config {
            Some(read_template(dir, PROJECT_CONFIG_TEMPLATE)?)
        } else {
            None
        };

        Ok(TemplateSet {
            jamroot: read_template(dir, JAMROOT_TEMPLATE)?,
            boostcpp: read_template(dir, BOOSTCPP_JAM)?,
            project_config,
        })
    }
}

fn read_template(dir: &Path, name: &str) -> Result<String, TemplateError> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).map_err(|source| TemplateError { path, source })
}

/// Templates shipped with the crate.
pub fn bundled_template_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

/// Template directory when none is given explicitly: `JAMGEN_TEMPLATE_DIR`,
/// then the bundled templates.
pub fn default_template_dir() -> PathBuf {
    match std::env::var_os(TEMPLATE_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => bundled_template_dir(),
    }
}

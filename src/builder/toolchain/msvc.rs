//! Visual Studio installation discovery.

use std::path::{Path, PathBuf};

use super::Prober;

/// Editions searched under the year-named installation directories.
const EDITIONS: [&str; 4] = ["Enterprise", "Professional", "Community", "BuildTools"];

/// Where to look for Visual Studio installations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VsSearch {
    /// `%ProgramFiles(x86)%`
    pub program_files_x86: Option<PathBuf>,
    /// `%ProgramFiles%`
    pub program_files: Option<PathBuf>,
}

impl VsSearch {
    /// Read the program files locations from the environment.
    pub fn from_env() -> Self {
        VsSearch {
            program_files_x86: std::env::var_os("ProgramFiles(x86)").map(PathBuf::from),
            program_files: std::env::var_os("ProgramFiles").map(PathBuf::from),
        }
    }

    /// Path to `vswhere.exe`: the installer copy if present, else PATH.
    fn vswhere(&self) -> String {
        if let Some(ref pf) = self.program_files_x86 {
            let path = pf
                .join("Microsoft Visual Studio")
                .join("Installer")
                .join("vswhere.exe");
            if path.is_file() {
                return path.to_string_lossy().into_owned();
            }
        }
        "vswhere".to_string()
    }

    /// Installation roots for a compiler version (`15`, `16`, `14`, ...).
    ///
    /// vswhere answers first; the fixed legacy and per-edition directories
    /// that exist on disk follow.
    pub fn installation_roots(&self, compiler_version: &str, prober: &dyn Prober) -> Vec<PathBuf> {
        let major: u32 = match compiler_version.split('.').next().and_then(|m| m.parse().ok()) {
            Some(major) => major,
            None => {
                tracing::debug!("unrecognized Visual Studio version `{}`", compiler_version);
                return Vec::new();
            }
        };

        let mut roots = Vec::new();

        let range = format!("[{}.0,{}.0)", major, major + 1);
        if let Some(out) = prober.query(
            &self.vswhere(),
            &["-version", &range, "-products", "*", "-property", "installationPath"],
        ) {
            roots.extend(
                out.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(PathBuf::from),
            );
        }

        for candidate in self.fixed_roots(major) {
            if candidate.is_dir() && !roots.contains(&candidate) {
                roots.push(candidate);
            }
        }

        roots
    }

    fn fixed_roots(&self, major: u32) -> Vec<PathBuf> {
        let year = match major {
            15 => Some(("2017", &self.program_files_x86)),
            16 => Some(("2019", &self.program_files_x86)),
            17 => Some(("2022", &self.program_files)),
            _ => None,
        };

        match year {
            Some((year, Some(base))) => EDITIONS
                .iter()
                .map(|edition| base.join("Microsoft Visual Studio").join(year).join(edition))
                .collect(),
            Some((_, None)) => Vec::new(),
            None => self
                .program_files_x86
                .iter()
                .map(|pf| pf.join(format!("Microsoft Visual Studio {}.0", major)))
                .collect(),
        }
    }
}

/// Find `cl.exe` under the given installation roots.
///
/// Modern layouts (`VC/Tools/MSVC/<ver>/bin/<host>/<target>/cl.exe`) are
/// searched before the legacy `VC/bin/cl.exe`. The first match wins and is
/// returned with forward slashes.
pub fn find_cl_exe(roots: &[PathBuf]) -> Option<String> {
    for root in roots {
        let mut matches = glob_under(root, "VC/Tools/MSVC/*/bin/*/*/cl.exe");
        matches.extend(glob_under(root, "VC/bin/cl.exe"));

        if let Some(cl) = matches.into_iter().next() {
            return Some(crate::util::fs::forward_slashes(cl));
        }
    }
    None
}

fn glob_under(root: &Path, pattern: &str) -> Vec<PathBuf> {
    let escaped = glob::Pattern::escape(&crate::util::fs::forward_slashes(root));
    let full = format!("{}/{}", escaped.trim_end_matches('/'), pattern);

    match glob::glob(&full) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            tracing::debug!("invalid glob `{}`: {}", full, e);
            Vec::new()
        }
    }
}

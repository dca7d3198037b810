//! Toolset executable detection.

use std::path::PathBuf;

use crate::resolver::platform::{TargetOs, Toolset};

use super::msvc::{find_cl_exe, VsSearch};
use super::Prober;

/// One attempted candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecProbe {
    /// The candidate executable or path
    pub candidate: String,
    /// Whether it was accepted
    pub found: bool,
}

/// Outcome of toolset executable detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResolution {
    /// The accepted executable, `None` to let b2 pick its default
    pub exec: Option<String>,
    /// Every candidate tried, in order
    pub attempts: Vec<ExecProbe>,
}

impl ExecResolution {
    fn record(&mut self, candidate: impl Into<String>, found: bool) {
        let candidate = candidate.into();
        if found && self.exec.is_none() {
            self.exec = Some(candidate.clone());
        }
        self.attempts.push(ExecProbe { candidate, found });
    }
}

/// Versioned executable names for a GCC-style toolset, most specific first.
///
/// `g++` with version `9.3` yields `g++-93` then `g++-9`; a zero minor
/// version is dropped so `9.0` yields only `g++-9`.
pub fn posix_candidates(toolset: Toolset, compiler_version: &str) -> Vec<String> {
    let mut parts = compiler_version.split('.');
    let major = parts.next().unwrap_or_default();
    let minor = parts.next().filter(|m| *m != "0");

    let with_major = format!("{}-{}", toolset.exec_stem(), major);
    let mut candidates = Vec::with_capacity(2);
    if let Some(minor) = minor {
        candidates.push(format!("{}{}", with_major, minor));
    }
    candidates.push(with_major);
    candidates
}

/// Detect the compiler executable b2 should use for the toolset.
///
/// Each failed candidate is skipped; nothing here is an error.
pub fn detect_toolset_exec(
    os: TargetOs,
    toolset: Toolset,
    compiler_version: &str,
    env_cxx: Option<&str>,
    prober: &dyn Prober,
    vs: &VsSearch,
) -> ExecResolution {
    let mut resolution = ExecResolution::default();

    if os.is_posix_like() || (os == TargetOs::Windows && toolset == Toolset::Gcc) {
        if let Some(cxx) = env_cxx.filter(|c| !c.trim().is_empty()) {
            let found = prober.probe(&format!("{} --version", cxx));
            resolution.record(cxx, found);
            if found {
                return resolution;
            }
        }

        for candidate in posix_candidates(toolset, compiler_version) {
            let found = prober.probe(&format!("{} --version", candidate));
            resolution.record(candidate, found);
            if found {
                return resolution;
            }
        }
    } else if os == TargetOs::Windows && toolset == Toolset::Msvc {
        let roots: Vec<PathBuf> = vs.installation_roots(compiler_version, prober);
        match find_cl_exe(&roots) {
            Some(cl) => resolution.record(cl, true),
            None => tracing::debug!(
                "no cl.exe found under {} Visual Studio installation(s)",
                roots.len()
            ),
        }
    }

    resolution
}

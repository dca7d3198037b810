//! Toolchain probing.
//!
//! Toolchain discovery runs candidate executables and looks at whether they
//! start. All process access goes through the [`Prober`] trait so resolution
//! can be tested without touching the host toolchain.
//!
//! Toolset executable priority (POSIX-like targets):
//! 1. The `CXX` environment variable
//! 2. `<exe>-<major><minor>` (minor omitted when `0`)
//! 3. `<exe>-<major>`
//! 4. The b2 default
//!
//! On Windows with MSVC the Visual Studio installation for the compiler
//! version is searched for `cl.exe` instead.

use crate::util::process::ProcessBuilder;

mod apple;
mod detect;
mod msvc;

pub use apple::sdk_path;
pub use detect::{detect_toolset_exec, posix_candidates, ExecProbe, ExecResolution};
pub use msvc::{find_cl_exe, VsSearch};

/// Narrow capability for running external tools.
pub trait Prober {
    /// Run a command line, discarding all output. True iff it exits cleanly.
    fn probe(&self, command: &str) -> bool;

    /// Run a program and return its trimmed stdout, or `None` on any failure.
    fn query(&self, program: &str, args: &[&str]) -> Option<String>;
}

/// Prober that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProber;

impl Prober for SystemProber {
    fn probe(&self, command: &str) -> bool {
        let Some(process) = ProcessBuilder::from_command_line(command) else {
            return false;
        };
        let ok = process.succeeds();
        tracing::debug!("probe `{}`: {}", command, if ok { "ok" } else { "failed" });
        ok
    }

    fn query(&self, program: &str, args: &[&str]) -> Option<String> {
        match ProcessBuilder::new(program).args(args).stdout_trimmed() {
            Ok(out) if !out.is_empty() => Some(out),
            Ok(_) => {
                tracing::debug!("`{} {}` printed nothing", program, args.join(" "));
                None
            }
            Err(e) => {
                tracing::debug!("{:#}", e);
                None
            }
        }
    }
}

/// Prober for runs with probing disabled: every probe fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProber;

impl Prober for NullProber {
    fn probe(&self, _command: &str) -> bool {
        false
    }

    fn query(&self, _program: &str, _args: &[&str]) -> Option<String> {
        None
    }
}

impl<P: Prober + ?Sized> Prober for &P {
    fn probe(&self, command: &str) -> bool {
        (**self).probe(command)
    }

    fn query(&self, program: &str, args: &[&str]) -> Option<String> {
        (**self).query(program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_prober() {
        assert!(!NullProber.probe("g++ --version"));
        assert_eq!(NullProber.query("xcrun", &["--show-sdk-path"]), None);
    }

    #[test]
    fn test_system_prober_missing_binary() {
        assert!(!SystemProber.probe("jamgen-no-such-compiler-9 --version"));
        assert!(!SystemProber.probe(""));
        assert_eq!(SystemProber.query("jamgen-no-such-tool", &[]), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_prober_exit_status() {
        assert!(SystemProber.probe("true"));
        assert!(!SystemProber.probe("false"));
    }
}

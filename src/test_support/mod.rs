//! Test utilities and mocks for jamgen unit tests.
//!
//! Toolchain probing is the only place the generator touches the host, so
//! the main mock here is [`MockProber`]: it answers probes and queries from
//! a fixed table and records every call.
//!
//! # Example
//!
//! ```rust,ignore
//! use jamgen::test_support::{fixtures, MockProber};
//!
//! #[test]
//! fn test_example() {
//!     let prober = MockProber::new()
//!         .succeed("g++-9 --version")
//!         .respond("xcrun", "/SDKs/MacOSX.sdk");
//!
//!     let input = fixtures::linux_gcc_input();
//!     // Resolve with `&prober`, then inspect `prober.calls()`...
//! }
//! ```

pub mod fixtures;

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::builder::toolchain::Prober;

/// Mock prober for testing toolchain detection without spawning processes.
///
/// Probes succeed only for registered command lines. Queries return the
/// registered stdout for a program, matched on the program name or its
/// file name so `C:/.../vswhere.exe` and `vswhere` both hit a `vswhere`
/// response.
#[derive(Debug, Default)]
pub struct MockProber {
    succeeding: HashSet<String>,
    responses: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
    queries: Mutex<Vec<String>>,
}

impl MockProber {
    /// Create a mock where every probe and query fails.
    pub fn new() -> Self {
        MockProber::default()
    }

    /// Make `command` probe successfully.
    pub fn succeed(mut self, command: impl Into<String>) -> Self {
        self.succeeding.insert(command.into());
        self
    }

    /// Answer queries to `program` with `stdout`.
    pub fn respond(mut self, program: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.responses.insert(program.into(), stdout.into());
        self
    }

    /// Probed command lines, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Queried command lines (`program arg...`), in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    fn response_for(&self, program: &str) -> Option<&String> {
        self.responses.get(program).or_else(|| {
            let stem = program
                .rsplit(['/', '\\'])
                .next()
                .map(|name| name.trim_end_matches(".exe"))?;
            self.responses.get(stem)
        })
    }
}

impl Prober for MockProber {
    fn probe(&self, command: &str) -> bool {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.to_string());
        }
        self.succeeding.contains(command)
    }

    fn query(&self, program: &str, args: &[&str]) -> Option<String> {
        if let Ok(mut queries) = self.queries.lock() {
            let mut line = program.to_string();
            for arg in args {
                line.push(' ');
                line.push_str(arg);
            }
            queries.push(line);
        }
        self.response_for(program).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_prober_records_calls() {
        let prober = MockProber::new().succeed("g++-9 --version");

        assert!(!prober.probe("g++-93 --version"));
        assert!(prober.probe("g++-9 --version"));

        assert_eq!(prober.calls(), vec!["g++-93 --version", "g++-9 --version"]);
    }

    #[test]
    fn test_mock_prober_queries() {
        let prober = MockProber::new().respond("vswhere", "C:/VS");

        assert_eq!(
            prober.query("C:/Installer/vswhere.exe", &["-latest"]).as_deref(),
            Some("C:/VS")
        );
        assert_eq!(prober.query("xcrun", &[]), None);
        assert_eq!(prober.queries(), vec!["C:/Installer/vswhere.exe -latest", "xcrun"]);
    }
}

//! `jamgen toolchain` command

use std::io::IsTerminal;

use anyhow::Result;

use jamgen::ops::{detect_toolchain, format_toolchain_report, ContextOptions};
use jamgen::util::diagnostic::{self, suggestions, Diagnostic};

use crate::cli::ToolchainArgs;

pub fn execute(args: ToolchainArgs) -> Result<()> {
    let opts = ContextOptions {
        input: super::input_path(&args.input)?,
        ..Default::default()
    };

    let report = detect_toolchain(&opts)?;
    print!("{}", format_toolchain_report(&report));

    if report.resolution.exec.is_none() && !report.resolution.attempts.is_empty() {
        let warning = Diagnostic::warning("no toolset executable found; b2 will pick its default")
            .with_location(&opts.input)
            .with_suggestion(suggestions::SET_CXX);
        diagnostic::emit(&warning, std::io::stderr().is_terminal());
    }

    Ok(())
}

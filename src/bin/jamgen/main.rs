//! jamgen CLI - Boost.Build configuration generator

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jamgen::builder::template::TemplateError;
use jamgen::resolver::ResolveError;
use jamgen::util::diagnostic::{self, Diagnostic};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        match to_diagnostic(&e) {
            Some(diag) => diagnostic::emit(&diag, std::io::stderr().is_terminal()),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

/// Typed library errors render as diagnostics; everything else as a chain.
fn to_diagnostic(e: &anyhow::Error) -> Option<Diagnostic> {
    if let Some(err) = e.downcast_ref::<ResolveError>() {
        return Some(err.to_diagnostic());
    }
    e.downcast_ref::<TemplateError>()
        .map(TemplateError::to_diagnostic)
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("jamgen=debug")
    } else {
        EnvFilter::new("jamgen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Flags(args) => commands::flags::execute(args),
        Commands::Toolchain(args) => commands::toolchain::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

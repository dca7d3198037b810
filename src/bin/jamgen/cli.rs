//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// jamgen - Generate Boost.Build (b2) configuration for a C++ package build
#[derive(Parser)]
#[command(name = "jamgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render jamroot, project-config.jam and the support files
    Generate(GenerateArgs),

    /// Print the resolved b2 flag tokens
    Flags(FlagsArgs),

    /// Show how the toolset executable is found
    Toolchain(ToolchainArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by every command that reads a generation input.
#[derive(Args, Clone)]
pub struct InputArgs {
    /// Generation input file (defaults to ./jamgen.toml)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory to write the documents to (defaults to the input's directory)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Directory holding the templates
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Generator revision (Boost version) to emulate, e.g. 1.66.0
    #[arg(long)]
    pub revision: Option<String>,

    /// Do not run any compiler or SDK tool
    #[arg(long)]
    pub no_probe: bool,

    /// Print the documents instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct FlagsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Generator revision (Boost version) to emulate
    #[arg(long)]
    pub revision: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not run any compiler or SDK tool
    #[arg(long)]
    pub no_probe: bool,
}

#[derive(Args)]
pub struct ToolchainArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

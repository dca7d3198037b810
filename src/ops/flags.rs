//! Implementation of `jamgen flags` and `jamgen toolchain`.

use std::path::PathBuf;

use anyhow::Result;

use crate::builder::toolchain::ExecResolution;
use crate::resolver::{FlagTokens, PlatformFlagResolver};
use crate::util::process::find_executable;

use super::context::{ContextOptions, GenerationContext};

/// Resolve the flag tokens for an input file.
pub fn resolve_flags(opts: &ContextOptions) -> Result<FlagTokens> {
    let ctx = GenerationContext::load(opts)?;
    ctx.generator().tokens()
}

/// Print tokens as `key = value`, one per line; multi-line values are
/// indented under their key.
pub fn format_tokens(tokens: &FlagTokens) -> String {
    let mut out = String::new();
    for (key, value) in tokens.iter() {
        let mut lines = value.lines();
        out.push_str(key);
        out.push_str(" =");
        if let Some(first) = lines.next() {
            out.push(' ');
            out.push_str(first);
        }
        out.push('\n');
        for line in lines {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Report of the toolset executable search.
#[derive(Debug, Clone)]
pub struct ToolchainReport {
    pub os: String,
    pub toolset: String,
    pub compiler_version: String,
    pub resolution: ExecResolution,
    /// Where the accepted executable lives, when it is on PATH
    pub location: Option<PathBuf>,
}

/// Run toolset executable detection for an input file, recording every
/// candidate tried.
pub fn detect_toolchain(opts: &ContextOptions) -> Result<ToolchainReport> {
    let ctx = GenerationContext::load(opts)?;
    toolchain_report(&ctx)
}

/// [`detect_toolchain`] for an already-loaded context.
pub fn toolchain_report(ctx: &GenerationContext) -> Result<ToolchainReport> {
    let deps = ctx.input.dependency_list()?;
    let resolver = PlatformFlagResolver::new(
        &ctx.input.settings,
        &ctx.input.options,
        &ctx.input.package,
        &deps,
    )
    .with_env(ctx.env.clone())
    .with_prober(ctx.prober())
    .with_vs_search(crate::builder::toolchain::VsSearch::from_env());

    let os = resolver.target_os()?;
    let toolset = resolver.toolset()?;
    let resolution = resolver.toolset_exec(os, toolset);
    let location = resolution.exec.as_deref().and_then(find_executable);

    Ok(ToolchainReport {
        os: os.to_string(),
        toolset: toolset.to_string(),
        compiler_version: ctx.input.settings.compiler_version.clone(),
        resolution,
        location,
    })
}

/// Human-readable form of a [`ToolchainReport`].
pub fn format_toolchain_report(report: &ToolchainReport) -> String {
    let mut out = format!(
        "target: {} / {} {}\n",
        report.os, report.toolset, report.compiler_version
    );
    if report.resolution.attempts.is_empty() {
        out.push_str("no candidates probed\n");
    }
    for attempt in &report.resolution.attempts {
        out.push_str(&format!(
            "  {} {}\n",
            if attempt.found { "found  " } else { "missing" },
            attempt.candidate
        ));
    }
    match report.resolution.exec {
        Some(ref exec) => {
            out.push_str(&format!("toolset executable: {}\n", exec));
            if let Some(ref location) = report.location {
                out.push_str(&format!("  at {}\n", location.display()));
            }
        }
        None => out.push_str(&format!(
            "toolset executable: {} (b2 default)\n",
            crate::resolver::DEFAULT_TOKEN
        )),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::toolchain::ExecProbe;

    #[test]
    fn test_format_tokens() {
        let tokens: FlagTokens = [
            ("fpic", "<flags>-fPIC\n<cxxflags>-fPIC"),
            ("os", "linux"),
            ("zlib_name", ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            format_tokens(&tokens),
            "fpic = <flags>-fPIC\n    <cxxflags>-fPIC\nos = linux\nzlib_name =\n"
        );
    }

    #[test]
    fn test_format_toolchain_report() {
        let report = ToolchainReport {
            os: "linux".to_string(),
            toolset: "gcc".to_string(),
            compiler_version: "9.3".to_string(),
            resolution: ExecResolution {
                exec: Some("g++-9".to_string()),
                attempts: vec![
                    ExecProbe {
                        candidate: "g++-93".to_string(),
                        found: false,
                    },
                    ExecProbe {
                        candidate: "g++-9".to_string(),
                        found: true,
                    },
                ],
            },
            location: None,
        };

        let text = format_toolchain_report(&report);
        assert!(text.starts_with("target: linux / gcc 9.3\n"));
        assert!(text.contains("missing g++-93"));
        assert!(text.contains("found   g++-9"));
        assert!(text.ends_with("toolset executable: g++-9\n"));
    }

    #[test]
    fn test_format_toolchain_report_default() {
        let report = ToolchainReport {
            os: "windows".to_string(),
            toolset: "clang".to_string(),
            compiler_version: "9".to_string(),
            resolution: ExecResolution::default(),
            location: None,
        };

        let text = format_toolchain_report(&report);
        assert!(text.contains("no candidates probed"));
        assert!(text.contains("$(DEFAULT) (b2 default)"));
    }
}

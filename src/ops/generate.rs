//! Implementation of `jamgen generate`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::generator::OutputDocuments;
use crate::util::fs::write_string;

use super::context::{ContextOptions, GenerationContext};

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Input file, template directory, revision and probing overrides
    pub context: ContextOptions,

    /// Output directory override
    pub out_dir: Option<PathBuf>,

    /// Render without writing anything
    pub dry_run: bool,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Where the documents were (or would have been) written
    pub out_dir: PathBuf,

    /// The rendered documents
    pub documents: OutputDocuments,

    /// Paths written, empty for a dry run
    pub written: Vec<PathBuf>,
}

/// Render every document and write it into the output directory.
///
/// Nothing is written unless every document rendered.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateResult> {
    let ctx = GenerationContext::load(&opts.context)?;
    generate_with(&ctx, opts.out_dir.as_deref(), opts.dry_run)
}

/// [`generate`] for an already-loaded context.
pub fn generate_with(
    ctx: &GenerationContext,
    out_dir: Option<&Path>,
    dry_run: bool,
) -> Result<GenerateResult> {
    let out_dir = ctx.output_dir(out_dir);
    let documents = ctx.generator().generate()?;

    let mut written = Vec::new();
    if !dry_run {
        written = write_documents(&documents, &out_dir)?;
    }

    Ok(GenerateResult {
        out_dir,
        documents,
        written,
    })
}

/// Write each document to `out_dir`, overwriting existing files.
pub fn write_documents(documents: &OutputDocuments, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(documents.len());
    for (name, content) in documents.iter() {
        let path = out_dir.join(name);
        write_string(&path, content)?;
        tracing::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

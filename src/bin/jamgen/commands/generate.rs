//! `jamgen generate` command

use anyhow::Result;

use jamgen::ops::{generate, ContextOptions, GenerateOptions};

use crate::cli::GenerateArgs;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let input = super::input_path(&args.input)?;

    let opts = GenerateOptions {
        context: ContextOptions {
            input,
            template_dir: args.template_dir,
            revision: args.revision,
            no_probe: args.no_probe,
        },
        out_dir: args.out_dir,
        dry_run: args.dry_run,
    };

    let result = generate(&opts)?;

    if opts.dry_run {
        for (name, content) in result.documents.iter() {
            println!("==> {} <==", result.out_dir.join(name).display());
            println!("{}", content);
        }
        return Ok(());
    }

    println!(
        "Generated {} files in {}",
        result.written.len(),
        result.out_dir.display()
    );

    Ok(())
}

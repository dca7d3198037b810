//! `jamgen flags` command

use anyhow::Result;

use jamgen::ops::{format_tokens, resolve_flags, ContextOptions};

use crate::cli::FlagsArgs;

pub fn execute(args: FlagsArgs) -> Result<()> {
    let opts = ContextOptions {
        input: super::input_path(&args.input)?,
        template_dir: None,
        revision: args.revision,
        no_probe: args.no_probe,
    };

    let tokens = resolve_flags(&opts)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        print!("{}", format_tokens(&tokens));
    }

    Ok(())
}

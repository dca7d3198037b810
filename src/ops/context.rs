//! Shared setup for generator operations.
//!
//! Loads the generation input and the merged configuration, then decides
//! the template directory, revision and probing mode from command-line
//! overrides, configuration and defaults (in that order).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::builder::generator::Generator;
use crate::builder::template;
use crate::builder::toolchain::{NullProber, Prober, SystemProber, VsSearch};
use crate::core::input::{input_dir, GenerationInput};
use crate::core::revision::Capabilities;
use crate::core::settings::EnvOverrides;
use crate::util::config::{self, Config};

/// Command-line overrides shared by the operations.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Generation input file
    pub input: PathBuf,
    /// Template directory override
    pub template_dir: Option<PathBuf>,
    /// Generator revision override
    pub revision: Option<String>,
    /// Force probing off
    pub no_probe: bool,
}

static SYSTEM_PROBER: SystemProber = SystemProber;
static NULL_PROBER: NullProber = NullProber;

/// Everything needed to run a generator for one input file.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub input_path: PathBuf,
    pub input: GenerationInput,
    pub config: Config,
    pub template_dir: PathBuf,
    pub capabilities: Capabilities,
    pub probe: bool,
    pub env: EnvOverrides,
}

impl GenerationContext {
    /// Load the input file and configuration for `opts`.
    pub fn load(opts: &ContextOptions) -> Result<Self> {
        let input = GenerationInput::load(&opts.input)?;
        let config = config::load_for_project(&input_dir(&opts.input));
        Self::from_parts(opts, input, config)
    }

    /// Build a context from an already-loaded input and configuration.
    pub fn from_parts(opts: &ContextOptions, input: GenerationInput, config: Config) -> Result<Self> {
        let template_dir = opts
            .template_dir
            .clone()
            .or_else(|| config.generator.template_dir.clone())
            .unwrap_or_else(template::default_template_dir);

        let capabilities = match opts
            .revision
            .as_deref()
            .or(config.generator.revision.as_deref())
        {
            Some(revision) => Capabilities::parse(revision)
                .with_context(|| format!("invalid generator revision `{}`", revision))?,
            None => Capabilities::latest(),
        };

        let probe = !opts.no_probe && config.probe_enabled();
        let env = EnvOverrides::from_env();
        for (key, value) in env.iter() {
            tracing::debug!("using {}={}", key, value);
        }

        tracing::debug!(
            "templates: {}, probing: {}",
            template_dir.display(),
            if probe { "on" } else { "off" }
        );

        Ok(GenerationContext {
            input_path: opts.input.clone(),
            input,
            config,
            template_dir,
            capabilities,
            probe,
            env,
        })
    }

    /// Directory containing the input file.
    pub fn input_dir(&self) -> PathBuf {
        input_dir(&self.input_path)
    }

    /// Output directory: explicit override, then configuration (relative to
    /// the input directory), then the input directory itself.
    pub fn output_dir(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(dir) = explicit {
            return dir.to_path_buf();
        }
        match self.config.generator.output_dir {
            Some(ref dir) if dir.is_relative() => self.input_dir().join(dir),
            Some(ref dir) => dir.clone(),
            None => self.input_dir(),
        }
    }

    /// The prober for this run.
    pub fn prober(&self) -> &'static dyn Prober {
        if self.probe {
            &SYSTEM_PROBER
        } else {
            &NULL_PROBER
        }
    }

    /// A generator configured from this context.
    pub fn generator(&self) -> Generator<'_> {
        Generator::new(&self.input, &self.template_dir)
            .with_capabilities(self.capabilities)
            .with_env(self.env.clone())
            .with_prober(self.prober())
            .with_vs_search(VsSearch::from_env())
    }
}

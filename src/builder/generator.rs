//! One generation pass: resolve tokens, render templates, collect documents.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use crate::builder::template::{self, TemplateSet};
use crate::builder::toolchain::{NullProber, Prober, VsSearch};
use crate::core::input::GenerationInput;
use crate::core::revision::Capabilities;
use crate::core::settings::EnvOverrides;
use crate::resolver::{FlagTokens, PlatformFlagResolver, ResolveError};
use crate::util::fs::forward_slashes;

pub const JAMROOT: &str = "jamroot";
pub const PROJECT_CONFIG: &str = "project-config.jam";
pub const BOOSTCPP: &str = "boostcpp.jam";
pub const SHORT_PATH: &str = "short_path.cmd";
pub const BOOST_BUILD: &str = "boost-build.jam";

/// Dependency holding the b2 installation for older revisions.
pub const BOOST_BUILD_DEPENDENCY: &str = "boost_build";

/// Windows helper printing the short (8.3) form of its argument.
const SHORT_PATH_CMD: &str = "@echo off\nECHO %~s1";

/// Generated documents, file name to content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocuments(BTreeMap<String, String>);

impl OutputDocuments {
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.0.insert(name.into(), content.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

static NULL_PROBER: NullProber = NullProber;

/// Generator for the b2 configuration documents.
pub struct Generator<'a> {
    input: &'a GenerationInput,
    template_dir: PathBuf,
    capabilities: Capabilities,
    env: EnvOverrides,
    prober: &'a dyn Prober,
    vs: VsSearch,
}

impl<'a> Generator<'a> {
    /// Create a generator reading templates from `template_dir`.
    pub fn new(input: &'a GenerationInput, template_dir: impl Into<PathBuf>) -> Self {
        Generator {
            input,
            template_dir: template_dir.into(),
            capabilities: Capabilities::latest(),
            env: EnvOverrides::default(),
            prober: &NULL_PROBER,
            vs: VsSearch::default(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_env(mut self, env: EnvOverrides) -> Self {
        self.env = env;
        self
    }

    pub fn with_prober(mut self, prober: &'a dyn Prober) -> Self {
        self.prober = prober;
        self
    }

    pub fn with_vs_search(mut self, vs: VsSearch) -> Self {
        self.vs = vs;
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Resolve the flag tokens without rendering anything.
    pub fn tokens(&self) -> Result<FlagTokens> {
        let deps = self.input.dependency_list()?;
        let tokens = PlatformFlagResolver::new(
            &self.input.settings,
            &self.input.options,
            &self.input.package,
            &deps,
        )
        .with_env(self.env.clone())
        .with_prober(self.prober)
        .with_capabilities(self.capabilities)
        .with_vs_search(self.vs.clone())
        .resolve()?;
        Ok(tokens)
    }

    /// Run the pass. Nothing is returned unless every document rendered.
    pub fn generate(&self) -> Result<OutputDocuments> {
        let caps = self.capabilities;
        let templates = TemplateSet::load(&self.template_dir, caps.project_config)?;
        let tokens = self.tokens()?;

        let mut docs = OutputDocuments::default();
        docs.insert(
            JAMROOT,
            template::render(&templates.jamroot, &tokens, template::JAMROOT_KEYS),
        );
        docs.insert(BOOSTCPP, templates.boostcpp);
        docs.insert(
            PROJECT_CONFIG,
            templates
                .project_config
                .map(|t| template::render(&t, &tokens, template::PROJECT_CONFIG_KEYS))
                .unwrap_or_default(),
        );
        docs.insert(SHORT_PATH, SHORT_PATH_CMD);

        if caps.build_tool_registration {
            docs.insert(BOOST_BUILD, self.boost_build_registration()?);
        }

        tracing::debug!("generated {} documents", docs.len());
        Ok(docs)
    }

    fn boost_build_registration(&self) -> Result<String, ResolveError> {
        let dep = self
            .input
            .dependencies
            .iter()
            .find(|d| d.name == BOOST_BUILD_DEPENDENCY)
            .ok_or_else(|| ResolveError::MissingDependency(BOOST_BUILD_DEPENDENCY.to_string()))?;

        let root = forward_slashes(&dep.root_path);
        Ok(format!(
            "boost-build \"{}/share/boost-build\" ;",
            root.trim_end_matches('/')
        ))
    }
}

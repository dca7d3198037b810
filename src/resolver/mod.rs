//! Platform flag resolution.
//!
//! Turns build settings, options, environment overrides and the dependency
//! list into the flat token map the templates are rendered from. Unknown
//! operating systems, architectures and compilers are hard errors; every
//! other lookup degrades to an empty token or the b2 default.

pub mod errors;
pub mod flags;
pub mod libraries;
pub mod platform;
pub mod projects;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::builder::toolchain::{self, ExecResolution, NullProber, Prober, VsSearch};
use crate::core::dependency::DependencyList;
use crate::core::revision::Capabilities;
use crate::core::settings::{BuildSettings, EnvOverrides, GeneratorOptions, PackageInfo};

pub use errors::ResolveError;
pub use flags::Link;
pub use platform::{TargetOs, Toolset, DEFAULT_TOKEN};

/// Placeholder name to resolved value. An empty value means "omit".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlagTokens(BTreeMap<String, String>);

impl FlagTokens {
    pub fn new() -> Self {
        FlagTokens(BTreeMap::new())
    }

    /// Set a token, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
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

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlagTokens {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FlagTokens(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

static NULL_PROBER: NullProber = NullProber;

/// Computes every flag token for one generation pass.
pub struct PlatformFlagResolver<'a> {
    settings: &'a BuildSettings,
    options: &'a GeneratorOptions,
    package: &'a PackageInfo,
    deps: &'a DependencyList,
    env: EnvOverrides,
    prober: &'a dyn Prober,
    capabilities: Capabilities,
    vs: VsSearch,
}

impl<'a> PlatformFlagResolver<'a> {
    /// Create a resolver with no environment overrides and probing disabled.
    pub fn new(
        settings: &'a BuildSettings,
        options: &'a GeneratorOptions,
        package: &'a PackageInfo,
        deps: &'a DependencyList,
    ) -> Self {
        PlatformFlagResolver {
            settings,
            options,
            package,
            deps,
            env: EnvOverrides::default(),
            prober: &NULL_PROBER,
            capabilities: Capabilities::latest(),
            vs: VsSearch::default(),
        }
    }

    /// Use the given environment snapshot.
    pub fn with_env(mut self, env: EnvOverrides) -> Self {
        self.env = env;
        self
    }

    /// Probe toolchain executables with `prober`.
    pub fn with_prober(mut self, prober: &'a dyn Prober) -> Self {
        self.prober = prober;
        self
    }

    /// Restrict tokens to what a generator revision supports.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Where to search for Visual Studio installations.
    pub fn with_vs_search(mut self, vs: VsSearch) -> Self {
        self.vs = vs;
        self
    }

    pub fn target_os(&self) -> Result<TargetOs, ResolveError> {
        TargetOs::from_setting(&self.settings.os)
    }

    pub fn toolset(&self) -> Result<Toolset, ResolveError> {
        Toolset::from_setting(&self.settings.compiler)
    }

    pub fn link(&self) -> Link {
        Link::from_shared(self.options.is_shared())
    }

    /// Find the compiler executable for the toolset.
    pub fn toolset_exec(&self, os: TargetOs, toolset: Toolset) -> ExecResolution {
        toolchain::detect_toolset_exec(
            os,
            toolset,
            &self.settings.compiler_version,
            self.env.cxx.as_deref(),
            self.prober,
            &self.vs,
        )
    }

    /// Resolve every token.
    pub fn resolve(&self) -> Result<FlagTokens, ResolveError> {
        let settings = self.settings;
        let caps = self.capabilities;

        let os = self.target_os()?;
        let address_model = platform::address_model(&settings.arch)?;
        let toolset = self.toolset()?;
        let link = self.link();
        let libcxx = settings.libcxx.as_deref();

        let mut tokens = FlagTokens::new();

        tokens.insert("name", self.package.name.as_str());
        tokens.insert("boost_version", self.package.version.as_str());
        tokens.insert("libraries", self.package.lib_short_names.join(" "));

        tokens.insert("os", os.as_str());
        tokens.insert("address_model", address_model);
        tokens.insert("architecture", platform::architecture(&settings.arch));
        tokens.insert("variant", platform::variant(settings.build_type.as_deref()));
        tokens.insert("link", link.as_str());
        tokens.insert(
            "runtime_link",
            flags::runtime_link(toolset, settings.runtime.as_deref()),
        );

        tokens.insert("toolset", toolset.as_str());
        tokens.insert(
            "toolset_version",
            platform::toolset_version(toolset, &settings.compiler_version),
        );
        let exec = self.toolset_exec(os, toolset).exec;
        tokens.insert("toolset_exec", exec.unwrap_or_else(|| DEFAULT_TOKEN.to_string()));

        tokens.insert("cxxstd", flags::cxxstd(toolset, os, libcxx));
        tokens.insert("cxxabi", flags::cxxabi(toolset, os, libcxx));
        tokens.insert("libcxx", flags::libcxx(toolset, os, libcxx));
        tokens.insert("fpic", flags::fpic(os, toolset, link));
        tokens.insert("threading", "multi");
        tokens.insert(
            "threadapi",
            flags::threadapi(
                self.options.threadapi.as_deref(),
                settings.threads.as_deref(),
                os,
            ),
        );

        let (arch_flags, isysroot) = if caps.apple_flags && os.is_apple() {
            let sdk = platform::apple_sdk(os, &settings.arch)
                .and_then(|sdk| toolchain::sdk_path(self.prober, sdk));
            (
                flags::arch_flags(os, &settings.arch),
                flags::isysroot(sdk.as_deref()),
            )
        } else {
            (String::new(), String::new())
        };
        tokens.insert("arch_flags", arch_flags);
        tokens.insert("isysroot", isysroot);

        let (profile_flags, profile_tools) = if caps.profile_env {
            (
                flags::profile_flags(toolset, &self.env),
                flags::profile_tools(toolset, os, &self.env),
            )
        } else {
            (String::new(), String::new())
        };
        tokens.insert("profile_flags", profile_flags);
        tokens.insert("profile_tools", profile_tools);

        tokens.insert("deps.include_paths", projects::include_paths(self.deps));
        tokens.insert(
            "deps_info",
            projects::project_declarations(self.deps).join("\n"),
        );

        for library in libraries::COMPRESSION_LIBRARIES {
            let lib = if library == "zstd" && !caps.zstd {
                libraries::LibraryFlags::default()
            } else {
                libraries::optional_library(self.options, self.deps, library)
            };
            tokens.insert(format!("{}_lib_paths", library), lib.lib_paths);
            tokens.insert(format!("{}_include_paths", library), lib.include_paths);
            tokens.insert(format!("{}_name", library), lib.name);
        }
        tokens.insert("libpath", libraries::icu_lib_paths(self.options, self.deps));

        let python = if caps.python {
            libraries::python_flags(self.deps, toolset)
        } else {
            libraries::PythonFlags::default()
        };
        tokens.insert("python_exec", python.exec);
        tokens.insert("python_version", python.version);
        tokens.insert("python_include", python.include);
        tokens.insert("python_lib", python.lib);

        tokens.insert("mpicxx", self.options.mpicxx.clone().unwrap_or_default());

        tracing::debug!("resolved {} flag tokens for {}/{}", tokens.len(), os, toolset);
        Ok(tokens)
    }
}

//! Generator revisions.
//!
//! The generator has shipped alongside every Boost release; each release
//! added a few options. Rather than keeping one generator per release, a
//! single resolver handles the union of all options and the revision only
//! selects which of them are active.

use semver::Version;

/// Feature gates selected by the generator revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Emit `boost-build.jam` pointing at the b2 installation
    pub build_tool_registration: bool,
    /// Render `project-config.jam` (otherwise it is emitted empty)
    pub project_config: bool,
    /// Python toolchain discovery
    pub python: bool,
    /// `-arch` and `-isysroot` flags for Apple targets
    pub apple_flags: bool,
    /// zstd compression support
    pub zstd: bool,
    /// `CFLAGS`/`CXXFLAGS`/`LDFLAGS` and tool overrides from the environment
    pub profile_env: bool,
}

impl Capabilities {
    /// Everything the newest revision supports.
    pub fn latest() -> Self {
        Capabilities {
            build_tool_registration: false,
            project_config: true,
            python: true,
            apple_flags: true,
            zstd: true,
            profile_env: true,
        }
    }

    /// Capabilities of the given revision.
    pub fn for_version(version: &Version) -> Self {
        let at_least = |minor: u64| *version >= Version::new(1, minor, 0);

        Capabilities {
            build_tool_registration: !at_least(65),
            project_config: at_least(65),
            python: at_least(67),
            apple_flags: at_least(68),
            zstd: at_least(69),
            profile_env: at_least(69),
        }
    }

    /// Parse a revision string such as `1.69.0` or `1.66`.
    pub fn parse(revision: &str) -> Result<Self, semver::Error> {
        parse_revision(revision).map(|v| Self::for_version(&v))
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::latest()
    }
}

/// Parse a Boost-style version, accepting `major.minor` as `major.minor.0`.
pub fn parse_revision(revision: &str) -> Result<Version, semver::Error> {
    let revision = revision.trim();
    if revision.matches('.').count() == 1 {
        Version::parse(&format!("{}.0", revision))
    } else {
        Version::parse(revision)
    }
}

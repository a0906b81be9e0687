use serde::{Deserialize, Serialize};
use std::path::Path;

use modsel_util::errors::ModselError;

/// Default upper bound on the resolution worker pool.
pub const DEFAULT_MAX_WORKERS: usize = 10;

/// Top-level configuration, usually loaded from `modsel.toml`.
///
/// Passed explicitly into ingestion and resolution; there is no global copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModselConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Resolution settings from `[resolver]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_max_workers", rename = "max-workers")]
    pub max_workers: usize,
    /// Run the regular and dev passes concurrently instead of one after the other.
    #[serde(default = "default_parallel_passes", rename = "parallel-passes")]
    pub parallel_passes: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            parallel_passes: default_parallel_passes(),
        }
    }
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}

fn default_parallel_passes() -> bool {
    true
}

impl ResolverConfig {
    /// Number of workers to spawn for `eligible` roots: `min(max_workers, eligible)`,
    /// never less than one.
    pub fn worker_count(&self, eligible: usize) -> usize {
        self.max_workers.min(eligible).max(1)
    }
}

impl ModselConfig {
    /// Parse a configuration from a TOML string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            ModselError::Config {
                message: format!("Failed to parse config: {e}"),
            }
            .into()
        })
    }

    /// Load a configuration file from the given path.
    pub fn load(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModselError::Config {
            message: format!("Failed to read config {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> miette::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

//! Registry snapshot: the on-disk hand-off from manifest ingestion.
//!
//! A snapshot lists every module version that owns metadata in the registry
//! together with its declared `bazel_dep`-style dependencies:
//!
//! ```toml
//! [[module]]
//! name = "rules_cc"
//! version = "0.1.1"
//!
//! [[module.deps]]
//! name = "platforms"
//! version = "0.0.10"
//! dev = false
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use modsel_util::errors::ModselError;

use crate::dependency::{DependencyEdge, DependencyKind};
use crate::module_key::ModuleKey;

/// The parsed representation of a registry snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleEntry>,
}

/// One module version that owns metadata in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub deps: Vec<DepEntry>,
}

/// A declared dependency of a module version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepEntry {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dev: bool,
}

impl ModuleEntry {
    pub fn key(&self) -> ModuleKey {
        ModuleKey::new(&self.name, &self.version)
    }

    fn is_well_formed(&self) -> bool {
        !self.name.is_empty() && !self.version.is_empty()
    }
}

impl RegistrySnapshot {
    /// Parse a snapshot from a TOML string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            ModselError::Snapshot {
                message: format!("Failed to parse snapshot: {e}"),
            }
            .into()
        })
    }

    /// Load and parse a snapshot file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModselError::Snapshot {
            message: format!("Failed to read snapshot {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Module versions that own metadata. Entries with an empty name or
    /// version are skipped.
    pub fn defined(&self) -> BTreeSet<ModuleKey> {
        let mut defined = BTreeSet::new();
        for module in &self.modules {
            if !module.is_well_formed() {
                tracing::warn!(
                    "Skipping module entry with empty name or version: '{}@{}'",
                    module.name,
                    module.version
                );
                continue;
            }
            defined.insert(module.key());
        }
        defined
    }

    /// Every declared dependency as an edge, in file order. Dependencies
    /// with an empty name or version are skipped.
    pub fn edges(&self) -> Vec<DependencyEdge> {
        let mut edges = Vec::new();
        for module in self.modules.iter().filter(|m| m.is_well_formed()) {
            for dep in &module.deps {
                let kind = DependencyKind::from_dev_flag(dep.dev);
                match DependencyEdge::new(&module.name, &module.version, &dep.name, &dep.version, kind) {
                    Some(edge) => edges.push(edge),
                    None => tracing::debug!(
                        "Skipping malformed dependency '{}@{}' of '{}'",
                        dep.name,
                        dep.version,
                        module.key()
                    ),
                }
            }
        }
        edges
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

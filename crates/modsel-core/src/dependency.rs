use serde::{Deserialize, Serialize};

use crate::module_key::ModuleKey;

/// Which dependency graph an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Regular,
    Dev,
}

impl Default for DependencyKind {
    fn default() -> Self {
        Self::Regular
    }
}

impl DependencyKind {
    pub fn from_dev_flag(dev: bool) -> Self {
        if dev {
            Self::Dev
        } else {
            Self::Regular
        }
    }

    /// Short label used in log lines and progress messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Dev => "dev",
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A "depends on" relationship between two module versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub from: ModuleKey,
    pub to: ModuleKey,
    pub kind: DependencyKind,
}

impl DependencyEdge {
    /// Build an edge from the raw ingestion tuple, or `None` if any of the
    /// four components is empty.
    pub fn new(
        from_module: &str,
        from_version: &str,
        to_module: &str,
        to_version: &str,
        kind: DependencyKind,
    ) -> Option<Self> {
        Some(Self {
            from: ModuleKey::try_new(from_module, from_version)?,
            to: ModuleKey::try_new(to_module, to_version)?,
            kind,
        })
    }
}

impl std::fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.kind)
    }
}

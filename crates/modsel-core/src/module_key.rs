use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of one version of one module, canonically `name@version`.
///
/// Equality, hashing and ordering all follow the serialized form, so two keys
/// built from different `(name, version)` splits of the same string compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleKey(String);

/// Error returned when a string is not a well-formed `name@version`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid module key '{0}': expected name@version")]
pub struct ParseModuleKeyError(String);

impl ModuleKey {
    pub fn new(name: &str, version: &str) -> Self {
        Self(format!("{name}@{version}"))
    }

    /// Build a key from raw components, or `None` if either is empty.
    ///
    /// The check runs before joining: `("a@b", "")` would otherwise read back
    /// as name `a`, version `b@`.
    pub fn try_new(name: &str, version: &str) -> Option<Self> {
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self::new(name, version))
    }

    /// Module name: everything before the first `@`.
    pub fn name(&self) -> &str {
        match self.0.split_once('@') {
            Some((name, _)) => name,
            None => &self.0,
        }
    }

    /// Version: everything after the first `@`, or `""` if there is none.
    pub fn version(&self) -> &str {
        match self.0.split_once('@') {
            Some((_, version)) => version,
            None => "",
        }
    }

    /// Both components are non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.name().is_empty() && !self.version().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleKey {
    type Err = ParseModuleKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('@') {
            Some((name, version)) if !name.is_empty() && !version.is_empty() => {
                Ok(Self::new(name, version))
            }
            _ => Err(ParseModuleKeyError(s.to_string())),
        }
    }
}

impl AsRef<str> for ModuleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

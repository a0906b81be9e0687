//! Operation: list module versions referenced but never defined.

use std::path::Path;

use modsel_core::module_key::ModuleKey;
use modsel_util::errors::ModselResult;

/// Print unresolved module versions, sorted.
pub fn unresolved(snapshot_path: &Path) -> ModselResult<Vec<ModuleKey>> {
    let registry = crate::load_registry(snapshot_path)?;
    let mut unresolved: Vec<ModuleKey> = registry.unresolved().into_iter().collect();
    unresolved.sort();

    if unresolved.is_empty() {
        println!("All referenced module versions are defined.");
    }
    for key in &unresolved {
        println!("{key}");
    }
    Ok(unresolved)
}

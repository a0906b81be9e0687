pub mod ops_cycles;
pub mod ops_resolve;
pub mod ops_unresolved;

use std::path::Path;

use modsel_core::snapshot::RegistrySnapshot;
use modsel_resolver::registry::Registry;
use modsel_util::errors::ModselResult;

/// Load a registry snapshot from disk and build its dependency graphs.
pub fn load_registry(snapshot_path: &Path) -> ModselResult<Registry> {
    let snapshot = RegistrySnapshot::from_path(snapshot_path)?;
    if snapshot.is_empty() {
        tracing::warn!("Snapshot {} defines no modules", snapshot_path.display());
    }
    Ok(Registry::from_snapshot(&snapshot))
}

//! Operation: report circular dependency groups.

use std::path::Path;

use modsel_resolver::cycles::CycleGroup;
use modsel_util::errors::ModselResult;

/// Print every cycle group in a snapshot, one per line.
pub fn cycles(snapshot_path: &Path) -> ModselResult<Vec<CycleGroup>> {
    let registry = crate::load_registry(snapshot_path)?;
    let cycles = registry.detect_cycles();

    if cycles.is_empty() {
        println!("No circular dependencies.");
    } else {
        println!("Found {} circular dependency group(s):", cycles.len());
        for (i, cycle) in cycles.iter().enumerate() {
            println!("  Cycle {}: {cycle}", i + 1);
        }
    }
    Ok(cycles)
}

//! Single-root Minimum Version Selection.
//!
//! For one root module version, walk everything reachable from it and pick,
//! per module name, the greatest version seen. The root's own module is
//! pinned to the root's version.

use std::collections::BTreeMap;

use modsel_core::module_key::ModuleKey;

use crate::graph::Adjacency;
use crate::version::is_newer;

/// Module name -> selected version, for one root.
pub type ResolutionMap = BTreeMap<String, String>;

/// Run MVS with `root` as the sole entry point of the build.
///
/// Traversal is an iterative depth-first walk over `adjacency`; every vertex
/// is compared against the running selection once, on first visit, and its
/// edges are followed whether or not it won. Vertices sharing the root's
/// module name never replace the root's version.
///
/// A root that is not in `adjacency` selects only itself.
pub fn select_versions(root: &ModuleKey, adjacency: &Adjacency) -> ResolutionMap {
    let mut selected = ResolutionMap::new();
    let root_name = root.name();
    selected.insert(root_name.to_string(), root.version().to_string());

    let Some(start) = adjacency.position(root) else {
        return selected;
    };

    let mut visited = vec![false; adjacency.len()];
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        if visited[pos] {
            continue;
        }
        visited[pos] = true;

        let key = adjacency.key(pos);
        if key.name() != root_name {
            select(&mut selected, key);
        }

        // Reversed so that successors pop in sorted order.
        for &next in adjacency.successors(pos).iter().rev() {
            if !visited[next] {
                stack.push(next);
            }
        }
    }

    selected
}

fn select(selected: &mut ResolutionMap, key: &ModuleKey) {
    match selected.get_mut(key.name()) {
        Some(current) => {
            if is_newer(key.version(), current) {
                *current = key.version().to_string();
            }
        }
        None => {
            selected.insert(key.name().to_string(), key.version().to_string());
        }
    }
}

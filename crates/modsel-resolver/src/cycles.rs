//! Circular dependency detection via strongly connected components.
//!
//! Detection is diagnostic only: it never blocks selection. Downstream
//! consumers use [`cycle_membership`] to avoid resolving through circular
//! edges.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use modsel_core::module_key::ModuleKey;
use modsel_util::errors::ModselError;
use petgraph::algo::tarjan_scc;
use serde::Serialize;

use crate::graph::DependencyGraph;

/// A set of module versions that mutually depend on each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CycleGroup {
    members: BTreeSet<ModuleKey>,
}

impl CycleGroup {
    pub fn new(members: impl IntoIterator<Item = ModuleKey>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    pub fn members(&self) -> &BTreeSet<ModuleKey> {
        &self.members
    }

    pub fn contains(&self, key: &ModuleKey) -> bool {
        self.members.contains(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for CycleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.members.iter().map(ModuleKey::as_str).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// Find every strongly connected component with more than one vertex.
///
/// Single-vertex components are not cycles, even with a self-loop. Groups are
/// returned ordered by their smallest member.
pub fn find_cycles(graph: &DependencyGraph) -> Result<Vec<CycleGroup>, ModselError> {
    graph.check_consistency()?;

    let inner = graph.inner();
    let mut cycles: Vec<CycleGroup> = tarjan_scc(inner)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| CycleGroup::new(scc.into_iter().map(|idx| inner[idx].clone())))
        .collect();
    cycles.sort();
    Ok(cycles)
}

/// Like [`find_cycles`], but logs failures and returns no groups instead.
pub fn detect_cycles(graph: &DependencyGraph) -> Vec<CycleGroup> {
    match find_cycles(graph) {
        Ok(cycles) => cycles,
        Err(e) => {
            tracing::warn!("Error detecting cycles: {e}");
            Vec::new()
        }
    }
}

/// Log all detected circular dependency groups.
pub fn log_cycles(cycles: &[CycleGroup]) {
    if cycles.is_empty() {
        return;
    }
    tracing::warn!("Found {} circular dependency group(s):", cycles.len());
    for (i, cycle) in cycles.iter().enumerate() {
        tracing::warn!("  Cycle {}: {cycle}", i + 1);
    }
}

/// Map each cycle member to the name of its group (`cycle_1`, `cycle_2`, ...).
///
/// Names follow the order of `cycles`, so groups from [`find_cycles`] get
/// stable names for the same graph.
pub fn cycle_membership(cycles: &[CycleGroup]) -> BTreeMap<ModuleKey, String> {
    let mut membership = BTreeMap::new();
    for (i, cycle) in cycles.iter().enumerate() {
        let name = format!("cycle_{}", i + 1);
        for member in cycle.members() {
            membership.insert(member.clone(), name.clone());
        }
    }
    membership
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ModuleKey {
        s.parse().unwrap()
    }

    #[test]
    fn three_cycle_is_one_group() {
        let mut g = DependencyGraph::new();
        g.add_dependency("a", "1", "b", "1");
        g.add_dependency("b", "1", "c", "1");
        g.add_dependency("c", "1", "a", "1");

        let cycles = find_cycles(&g).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(
            cycles[0],
            CycleGroup::new([key("a@1"), key("b@1"), key("c@1")])
        );
    }

    #[test]
    fn acyclic_chain_has_no_groups() {
        let mut g = DependencyGraph::new();
        g.add_dependency("a", "1", "b", "1");
        g.add_dependency("b", "1", "c", "1");
        assert!(find_cycles(&g).unwrap().is_empty());
    }

    #[test]
    fn self_loop_is_not_reported() {
        let mut g = DependencyGraph::new();
        g.add_dependency("a", "1", "a", "1");
        assert!(find_cycles(&g).unwrap().is_empty());
    }

    #[test]
    fn disjoint_cycles_are_separate_groups() {
        let mut g = DependencyGraph::new();
        g.add_dependency("x", "1", "y", "1");
        g.add_dependency("y", "1", "x", "1");
        g.add_dependency("a", "1", "b", "1");
        g.add_dependency("b", "1", "a", "1");
        g.add_dependency("a", "1", "x", "1");

        let cycles = find_cycles(&g).unwrap();
        assert_eq!(cycles.len(), 2);
        assert!(cycles[0].contains(&key("a@1")));
        assert!(cycles[1].contains(&key("x@1")));
    }

    #[test]
    fn versions_of_same_module_can_form_a_cycle() {
        let mut g = DependencyGraph::new();
        g.add_dependency("m", "1.0", "n", "1.0");
        g.add_dependency("n", "1.0", "m", "1.0");
        g.add_dependency("m", "2.0", "n", "1.0");

        let cycles = find_cycles(&g).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 2);
        assert!(!cycles[0].contains(&key("m@2.0")));
    }

    #[test]
    fn display_lists_members() {
        let group = CycleGroup::new([key("b@1"), key("a@1")]);
        assert_eq!(group.to_string(), "[a@1, b@1]");
    }

    #[test]
    fn membership_names_each_group() {
        let cycles = vec![
            CycleGroup::new([key("a@1"), key("b@1"), key("c@1")]),
            CycleGroup::new([key("x@1"), key("y@1")]),
        ];
        let membership = cycle_membership(&cycles);
        assert_eq!(membership.len(), 5);
        assert_eq!(membership[&key("a@1")], "cycle_1");
        assert_eq!(membership[&key("c@1")], "cycle_1");
        assert_eq!(membership[&key("y@1")], "cycle_2");
    }
}

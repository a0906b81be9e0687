//! Dependency graph construction and adjacency snapshots.

use std::collections::HashMap;

use modsel_core::module_key::ModuleKey;
use modsel_util::errors::ModselError;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// A directed "depends on" graph over module versions, backed by petgraph.
///
/// Vertex and edge insertion are idempotent. The graph is built
/// single-threaded during ingestion and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<ModuleKey, ()>,
    /// Lookup from module key to node index.
    index: HashMap<ModuleKey, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or retrieve a vertex. Keys with an empty name or version are
    /// rejected and yield `None`.
    pub fn add_vertex(&mut self, key: ModuleKey) -> Option<NodeIndex> {
        if !key.is_well_formed() {
            tracing::trace!("Rejecting malformed module key '{key}'");
            return None;
        }
        if let Some(&idx) = self.index.get(&key) {
            return Some(idx);
        }
        let idx = self.graph.add_node(key.clone());
        self.index.insert(key, idx);
        Some(idx)
    }

    /// Add a vertex from its name and version. Either being empty yields
    /// `None`.
    pub fn add_module(&mut self, name: &str, version: &str) -> Option<NodeIndex> {
        self.add_vertex(ModuleKey::try_new(name, version)?)
    }

    /// Add a dependency edge, inserting both endpoints if needed.
    ///
    /// Returns `true` only when a new edge was inserted. Duplicate edges and
    /// edges with a malformed endpoint are no-ops.
    pub fn add_edge(&mut self, from: &ModuleKey, to: &ModuleKey) -> bool {
        if !from.is_well_formed() || !to.is_well_formed() {
            tracing::trace!("Dropping malformed dependency edge '{from}' -> '{to}'");
            return false;
        }
        let (Some(from_idx), Some(to_idx)) =
            (self.add_vertex(from.clone()), self.add_vertex(to.clone()))
        else {
            return false;
        };
        if self.graph.contains_edge(from_idx, to_idx) {
            return false;
        }
        self.graph.add_edge(from_idx, to_idx, ());
        true
    }

    /// Add a dependency edge from the raw ingestion tuple.
    pub fn add_dependency(
        &mut self,
        from_module: &str,
        from_version: &str,
        to_module: &str,
        to_version: &str,
    ) -> bool {
        match (
            ModuleKey::try_new(from_module, from_version),
            ModuleKey::try_new(to_module, to_version),
        ) {
            (Some(from), Some(to)) => self.add_edge(&from, &to),
            _ => {
                tracing::trace!(
                    "Dropping malformed dependency edge '{from_module}@{from_version}' -> '{to_module}@{to_version}'"
                );
                false
            }
        }
    }

    pub fn contains(&self, key: &ModuleKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn contains_edge(&self, from: &ModuleKey, to: &ModuleKey) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &ModuleKey> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// The underlying petgraph, for algorithms that work on indices.
    pub(crate) fn inner(&self) -> &DiGraph<ModuleKey, ()> {
        &self.graph
    }

    /// Verify that the key index and the petgraph storage agree.
    pub(crate) fn check_consistency(&self) -> Result<(), ModselError> {
        if self.index.len() != self.graph.node_count() {
            return Err(ModselError::Graph {
                message: format!(
                    "vertex index holds {} keys but graph has {} vertices",
                    self.index.len(),
                    self.graph.node_count()
                ),
            });
        }
        for (key, &idx) in &self.index {
            if self.graph.node_weight(idx) != Some(key) {
                return Err(ModselError::Graph {
                    message: format!("vertex index entry for '{key}' is stale"),
                });
            }
        }
        Ok(())
    }

    /// Snapshot the direct successors of every vertex.
    ///
    /// Computed once per resolution pass and shared read-only by all workers.
    pub fn adjacency(&self) -> Result<Adjacency, ModselError> {
        self.check_consistency()?;

        let keys: Vec<ModuleKey> = self.vertices().cloned().collect();
        let positions: HashMap<ModuleKey, usize> = keys
            .iter()
            .enumerate()
            .map(|(pos, key)| (key.clone(), pos))
            .collect();

        let mut successors = Vec::with_capacity(keys.len());
        for idx in self.graph.node_indices() {
            let mut next: Vec<usize> = self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .map(NodeIndex::index)
                .collect();
            next.sort_by(|a, b| keys[*a].cmp(&keys[*b]));
            successors.push(next);
        }

        Ok(Adjacency {
            keys,
            successors,
            positions,
        })
    }
}

/// Direct successors of every vertex, addressed by dense positions.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    keys: Vec<ModuleKey>,
    successors: Vec<Vec<usize>>,
    positions: HashMap<ModuleKey, usize>,
}

impl Adjacency {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All vertex keys; a key's slice index is its position.
    pub fn keys(&self) -> &[ModuleKey] {
        &self.keys
    }

    pub fn position(&self, key: &ModuleKey) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn key(&self, pos: usize) -> &ModuleKey {
        &self.keys[pos]
    }

    /// Positions of the direct successors of `pos`, sorted by key.
    pub fn successors(&self, pos: usize) -> &[usize] {
        &self.successors[pos]
    }
}

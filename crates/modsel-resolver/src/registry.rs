//! Registry-level orchestration: regular and dev graphs, unresolved module
//! versions, cycle diagnostics, and the two resolution passes.

use std::collections::HashSet;

use modsel_core::config::ResolverConfig;
use modsel_core::dependency::{DependencyEdge, DependencyKind};
use modsel_core::module_key::ModuleKey;
use modsel_core::snapshot::RegistrySnapshot;
use serde::Serialize;

use crate::cycles::{detect_cycles, log_cycles, CycleGroup};
use crate::engine::{AggregateResult, ResolutionEngine};
use crate::graph::DependencyGraph;

/// All module versions of a registry and their declared dependencies.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    regular: DependencyGraph,
    dev: DependencyGraph,
    /// Union of `regular` and `dev`; used for cycle detection.
    combined: DependencyGraph,
    /// Module versions that own metadata.
    defined: HashSet<ModuleKey>,
}

/// Output of a full registry resolution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistryResolution {
    /// Selections over regular dependency edges, per root.
    pub mvs: AggregateResult,
    /// Selections over dev dependency edges, per root.
    pub mvs_dev: AggregateResult,
    pub cycles: Vec<CycleGroup>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an ingestion snapshot.
    pub fn from_snapshot(snapshot: &RegistrySnapshot) -> Self {
        let mut registry = Self::new();
        for key in snapshot.defined() {
            registry.define_module(key.name(), key.version());
        }
        for edge in snapshot.edges() {
            registry.add_dependency(&edge);
        }
        tracing::debug!(
            "Registry has {} module versions ({} defined), {} regular and {} dev edges",
            registry.combined.vertex_count(),
            registry.defined.len(),
            registry.regular.edge_count(),
            registry.dev.edge_count()
        );
        registry
    }

    /// Record a module version that owns metadata. Returns `false` for an
    /// empty name or version.
    pub fn define_module(&mut self, name: &str, version: &str) -> bool {
        let Some(key) = ModuleKey::try_new(name, version) else {
            return false;
        };
        self.regular.add_vertex(key.clone());
        self.dev.add_vertex(key.clone());
        self.combined.add_vertex(key.clone());
        self.defined.insert(key);
        true
    }

    /// Add a dependency edge to the graph for its kind. Returns `true` if the
    /// edge was new.
    pub fn add_dependency(&mut self, edge: &DependencyEdge) -> bool {
        let inserted = match edge.kind {
            DependencyKind::Regular => self.regular.add_edge(&edge.from, &edge.to),
            DependencyKind::Dev => self.dev.add_edge(&edge.from, &edge.to),
        };
        self.combined.add_edge(&edge.from, &edge.to);
        inserted
    }

    pub fn graph(&self, kind: DependencyKind) -> &DependencyGraph {
        match kind {
            DependencyKind::Regular => &self.regular,
            DependencyKind::Dev => &self.dev,
        }
    }

    pub fn combined(&self) -> &DependencyGraph {
        &self.combined
    }

    pub fn defined(&self) -> &HashSet<ModuleKey> {
        &self.defined
    }

    /// Module versions referenced as dependencies but never defined.
    pub fn unresolved(&self) -> HashSet<ModuleKey> {
        self.combined
            .vertices()
            .filter(|key| !self.defined.contains(*key))
            .cloned()
            .collect()
    }

    /// Circular dependency groups across regular and dev edges, logged once.
    pub fn detect_cycles(&self) -> Vec<CycleGroup> {
        let cycles = detect_cycles(&self.combined);
        log_cycles(&cycles);
        cycles
    }

    /// Run cycle diagnostics and both resolution passes with a default engine.
    pub async fn resolve(&self, config: &ResolverConfig) -> RegistryResolution {
        self.resolve_with(&ResolutionEngine::new(config)).await
    }

    /// Run cycle diagnostics and both resolution passes.
    ///
    /// The passes share nothing mutable and run concurrently unless the
    /// engine's config disables `parallel_passes`.
    pub async fn resolve_with(&self, engine: &ResolutionEngine) -> RegistryResolution {
        let cycles = self.detect_cycles();
        let unresolved = self.unresolved();
        if !unresolved.is_empty() {
            tracing::info!(
                "{} module version(s) are unresolved and will not be used as roots",
                unresolved.len()
            );
        }

        let regular = engine.resolve_graph(&self.regular, &unresolved, DependencyKind::Regular);
        let dev = engine.resolve_graph(&self.dev, &unresolved, DependencyKind::Dev);

        let (mvs, mvs_dev) = if engine.config().parallel_passes {
            tokio::join!(regular, dev)
        } else {
            let mvs = regular.await;
            (mvs, dev.await)
        };

        RegistryResolution {
            mvs,
            mvs_dev,
            cycles,
        }
    }
}

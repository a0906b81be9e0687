//! Registry-wide resolution: run MVS once per eligible root on a bounded
//! worker pool and collect the per-root selections.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use indicatif::ProgressBar;
use modsel_core::config::ResolverConfig;
use modsel_core::dependency::DependencyKind;
use modsel_core::module_key::ModuleKey;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use crate::graph::{Adjacency, DependencyGraph};
use crate::mvs::{select_versions, ResolutionMap};

/// Root module version -> its selections.
pub type AggregateResult = BTreeMap<ModuleKey, ResolutionMap>;

/// Drives [`select_versions`] across every eligible root of a graph.
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    config: ResolverConfig,
    progress: Option<ProgressBar>,
}

impl ResolutionEngine {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            config: config.clone(),
            progress: None,
        }
    }

    /// Tick `progress` once per resolved root. Its length grows by the root
    /// count at the start of each pass.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every eligible root of `graph`.
    ///
    /// If the adjacency snapshot cannot be built the pass is skipped and an
    /// empty result is returned.
    pub async fn resolve_graph(
        &self,
        graph: &DependencyGraph,
        unresolved: &HashSet<ModuleKey>,
        kind: DependencyKind,
    ) -> AggregateResult {
        let adjacency = match graph.adjacency() {
            Ok(adjacency) => adjacency,
            Err(e) => {
                tracing::warn!("Error getting adjacency map for per-version MVS ({kind}): {e}");
                return AggregateResult::new();
            }
        };
        self.resolve_adjacency(Arc::new(adjacency), unresolved, kind)
            .await
    }

    /// Resolve every eligible root of a prepared adjacency snapshot.
    pub async fn resolve_adjacency(
        &self,
        adjacency: Arc<Adjacency>,
        unresolved: &HashSet<ModuleKey>,
        kind: DependencyKind,
    ) -> AggregateResult {
        let roots = eligible_roots(&adjacency, unresolved);
        if roots.is_empty() {
            tracing::info!("No module versions to calculate MVS for ({kind})");
            return AggregateResult::new();
        }

        let total = roots.len();
        let workers = self.config.worker_count(total);
        tracing::info!("Running MVS for {total} {kind} module versions on {workers} workers");
        if let Some(pb) = &self.progress {
            pb.inc_length(total as u64);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        for root in roots {
            // Cannot fail while `rx` is alive.
            let _ = tx.send(root);
        }
        drop(tx);

        let queue = Arc::new(Mutex::new(rx));
        let aggregate = Arc::new(Mutex::new(AggregateResult::new()));

        let mut join_set = JoinSet::new();
        for _ in 0..workers {
            let queue = Arc::clone(&queue);
            let aggregate = Arc::clone(&aggregate);
            let adjacency = Arc::clone(&adjacency);
            let progress = self.progress.clone();
            join_set.spawn_blocking(move || {
                let mut resolved = 0usize;
                loop {
                    let next = queue.blocking_lock().blocking_recv();
                    let Some(root) = next else {
                        break;
                    };
                    let selected = select_versions(&root, &adjacency);
                    aggregate.blocking_lock().insert(root, selected);
                    if let Some(pb) = &progress {
                        pb.inc(1);
                    }
                    resolved += 1;
                }
                resolved
            });
        }

        join_workers(&mut join_set, kind).await;

        let aggregate = std::mem::take(&mut *aggregate.lock().await);
        if aggregate.len() < total {
            tracing::warn!(
                "MVS ({kind}) resolved only {} of {total} module versions",
                aggregate.len()
            );
        }
        tracing::info!(
            "Calculated MVS for {} {kind} module versions",
            aggregate.len()
        );
        aggregate
    }
}

/// Wait for every worker to finish. A worker panic is re-raised here, so a
/// pass never returns an aggregate with roots silently missing.
async fn join_workers(join_set: &mut JoinSet<usize>, kind: DependencyKind) {
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok(resolved) => tracing::debug!("MVS worker ({kind}) resolved {resolved} roots"),
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => tracing::warn!("MVS worker ({kind}) was cancelled: {e}"),
        }
    }
}

/// Every vertex of `adjacency` that may serve as a root, sorted.
pub fn eligible_roots(adjacency: &Adjacency, unresolved: &HashSet<ModuleKey>) -> Vec<ModuleKey> {
    let mut roots: Vec<ModuleKey> = adjacency
        .keys()
        .iter()
        .filter(|key| !unresolved.contains(*key))
        .cloned()
        .collect();
    roots.sort();
    roots
}

/// Resolve every eligible root on the calling thread.
///
/// Produces the same result as [`ResolutionEngine::resolve_adjacency`].
pub fn resolve_sequential(adjacency: &Adjacency, unresolved: &HashSet<ModuleKey>) -> AggregateResult {
    eligible_roots(adjacency, unresolved)
        .into_iter()
        .map(|root| {
            let selected = select_versions(&root, adjacency);
            (root, selected)
        })
        .collect()
}

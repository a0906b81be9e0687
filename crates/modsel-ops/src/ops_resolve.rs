//! Operation: resolve every module version of a registry snapshot.

use std::path::PathBuf;

use modsel_core::config::ModselConfig;
use modsel_resolver::engine::ResolutionEngine;
use modsel_resolver::registry::RegistryResolution;
use modsel_util::errors::{ModselError, ModselResult};
use modsel_util::progress;

/// Options for `modsel resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    /// Registry snapshot to resolve.
    pub snapshot: PathBuf,
    /// Optional `modsel.toml`.
    pub config: Option<PathBuf>,
    /// Overrides `resolver.max-workers`.
    pub jobs: Option<usize>,
    /// Write JSON here instead of stdout.
    pub output: Option<PathBuf>,
    /// Draw a progress bar on stderr.
    pub progress: bool,
}

/// Load the snapshot, run both resolution passes, and emit the JSON result.
pub async fn resolve(opts: &ResolveOptions) -> ModselResult<RegistryResolution> {
    let mut config = ModselConfig::load_or_default(opts.config.as_deref())?;
    if let Some(jobs) = opts.jobs {
        config.resolver.max_workers = jobs;
    }

    let registry = crate::load_registry(&opts.snapshot)?;
    progress::status(
        "Resolving",
        &format!("{} module versions", registry.defined().len()),
    );

    let pb = if opts.progress {
        progress::progress_bar(0, "MVS")
    } else {
        progress::hidden()
    };
    let engine = ResolutionEngine::new(&config.resolver).with_progress(pb.clone());
    let resolution = registry.resolve_with(&engine).await;
    pb.finish_and_clear();

    if !resolution.cycles.is_empty() {
        progress::status_warn(
            "Warning",
            &format!(
                "found {} circular dependency group(s)",
                resolution.cycles.len()
            ),
        );
    }

    let json = render_json(&resolution)?;
    match &opts.output {
        Some(path) => {
            modsel_util::fs::ensure_parent_dir(path).map_err(ModselError::Io)?;
            std::fs::write(path, format!("{json}\n")).map_err(|e| ModselError::Output {
                message: format!("Failed to write {}: {e}", path.display()),
            })?;
            progress::status("Finished", &format!("wrote {}", path.display()));
        }
        None => println!("{json}"),
    }

    Ok(resolution)
}

/// Render a resolution as pretty-printed JSON with sorted keys.
pub fn render_json(resolution: &RegistryResolution) -> ModselResult<String> {
    serde_json::to_string_pretty(resolution).map_err(|e| {
        ModselError::Output {
            message: format!("Failed to serialize resolution: {e}"),
        }
        .into()
    })
}

//! Handler for `modsel resolve`.

use std::io::IsTerminal;
use std::path::PathBuf;

use modsel_util::errors::ModselResult as Result;

use modsel_ops::ops_resolve::{self, ResolveOptions};

pub async fn exec(
    snapshot: PathBuf,
    config: Option<PathBuf>,
    jobs: Option<usize>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    if jobs == Some(0) {
        return Err(modsel_util::errors::ModselError::Config {
            message: "--jobs must be at least 1".to_string(),
        }
        .into());
    }

    let opts = ResolveOptions {
        snapshot,
        config,
        jobs,
        output,
        progress: !quiet && std::io::stderr().is_terminal(),
    };

    ops_resolve::resolve(&opts).await?;
    Ok(())
}

//! Handler for `modsel cycles`.

use std::path::Path;

use modsel_util::errors::ModselResult as Result;

pub fn exec(snapshot: &Path) -> Result<()> {
    modsel_ops::ops_cycles::cycles(snapshot)?;
    Ok(())
}

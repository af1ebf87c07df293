use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Delete the build output directory if present. A failure mid-delete is not
/// recovered; the error propagates to the dispatcher.
pub fn remove_build_dir(root: &Path) -> Result<()> {
    let build_dir = root.join("build");
    if build_dir.is_dir() {
        fs::remove_dir_all(&build_dir)
            .with_context(|| format!("removing {}", build_dir.display()))?;
        println!("Removed build directory: {}", build_dir.display());
    } else {
        println!("No build directory found.");
    }
    Ok(())
}

//! File system utilities.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Writes `content` to `path` through a temp file and rename, creating
/// parent directories as needed.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn atomic_write(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move config into place: {}", path.display()))?;

    Ok(())
}

//! Static asset copying.

use log::{debug, info, warn};
use sitedown_core::Result;
use std::fs;
use std::path::Path;

/// Remove a directory and everything in it, if it exists.
pub fn clean_dir(path: &Path) -> Result<()> {
    if path.exists() {
        info!("Removing {}", path.display());
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Recursively copy `source` into `dest`, returning the number of files copied.
///
/// `dest` is created if needed. A missing `source` copies nothing.
pub fn copy_static(source: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;

    if !source.exists() {
        warn!("Static directory {} does not exist", source.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            debug!("Copying directory {}", path.display());
            copied += copy_static(&path, &target)?;
        } else {
            debug!("{} -> {}", path.display(), target.display());
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

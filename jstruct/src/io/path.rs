//! Path resolution performed before every model read or write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::PathError;

/// Resolve `input` into an absolute path.
///
/// Warns (without failing) when the file name does not carry `extension`.
/// With `must_exist == false` the absolute path is returned without touching
/// the filesystem. With `must_exist == true` symlinks are resolved and the
/// target must be an existing regular file. Never creates or modifies files.
pub fn resolve_path(
    input: &Path,
    must_exist: bool,
    extension: &str,
) -> Result<PathBuf, PathError> {
    let path = std::path::absolute(input).map_err(|source| PathError::Absolute {
        path: input.to_path_buf(),
        source,
    })?;

    if !has_extension(&path, extension) {
        warn!(
            path = %path.display(),
            extension,
            "file name does not end with expected extension"
        );
    }

    if !must_exist {
        debug!(path = %path.display(), "resolved path");
        return Ok(path);
    }

    let canonical = fs::canonicalize(&path).map_err(|source| PathError::Canonicalize {
        path: path.clone(),
        source,
    })?;
    let metadata = fs::metadata(&canonical).map_err(|source| PathError::Canonicalize {
        path: canonical.clone(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(PathError::NotAFile { path: canonical });
    }

    debug!(path = %canonical.display(), "resolved existing file");
    Ok(canonical)
}

/// True if the file name ends with `.{extension}`; a file named exactly
/// `.json` counts.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(&format!(".{extension}")))
}

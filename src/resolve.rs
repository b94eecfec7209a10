//! Executable path resolution

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::ResolveError;

/// Resolve a command name to an absolute, validated executable path.
///
/// Names containing a path separator are taken relative to the current
/// directory. Bare names are searched in `search_paths`, or in `$PATH` when
/// the list is empty. With `secure_path`, `.` and `..` segments are dropped
/// from the name before anything else happens.
pub fn resolve(
    name: &str,
    search_paths: &[PathBuf],
    secure_path: bool,
) -> Result<PathBuf, ResolveError> {
    let cleaned = if secure_path {
        strip_traversal(Path::new(name))
    } else {
        PathBuf::from(name)
    };

    if cleaned.as_os_str().is_empty() {
        return Err(ResolveError::NotFound {
            name: name.to_string(),
        });
    }

    let cwd = env::current_dir().map_err(ResolveError::CurrentDir)?;

    let path = if cleaned.components().count() > 1 || cleaned.is_absolute() {
        cwd.join(&cleaned)
    } else {
        search(name, &cleaned, search_paths, &cwd)?
    };

    validate(name, &path)?;
    debug!(name, path = %path.display(), "resolved command");
    Ok(path)
}

fn search(
    name: &str,
    bare: &Path,
    search_paths: &[PathBuf],
    cwd: &Path,
) -> Result<PathBuf, ResolveError> {
    let found = if search_paths.is_empty() {
        which::which(bare)
    } else {
        let joined = env::join_paths(search_paths).map_err(|_| ResolveError::NotFound {
            name: name.to_string(),
        })?;
        which::which_in(bare, Some(joined), cwd)
    };

    if let Ok(path) = found {
        return Ok(path);
    }

    // `which` only reports executables. Look for a non-executable match so the
    // caller gets a precise error instead of "not found".
    let dirs: Vec<PathBuf> = if search_paths.is_empty() {
        env::var_os("PATH")
            .map(|paths| env::split_paths(&paths).collect())
            .unwrap_or_default()
    } else {
        search_paths.to_vec()
    };

    dirs.iter()
        .map(|dir| cwd.join(dir).join(bare))
        .find(|candidate| candidate.exists())
        .ok_or_else(|| ResolveError::NotFound {
            name: name.to_string(),
        })
}

fn validate(name: &str, path: &Path) -> Result<(), ResolveError> {
    let metadata = fs::metadata(path).map_err(|_| ResolveError::NotFound {
        name: name.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(ResolveError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(ResolveError::NotExecutable {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Drop `.` and `..` segments without touching the filesystem.
fn strip_traversal(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir | Component::ParentDir))
        .collect()
}

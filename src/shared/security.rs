use crate::shared::Result;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolves a provider path against a root directory
///
/// # Security
/// Only plain relative paths are accepted, so the resolved path stays
/// lexically inside `root`. Symlinked directories along the way are not
/// checked here; see [`validate_no_symlinked_ancestors`].
///
/// # Errors
/// Returns an error if the path is empty, absolute, or contains `..`
/// or other non-normal components
pub fn resolve_within_root(root: &Path, path: &str) -> Result<PathBuf> {
    if path.trim().is_empty() {
        anyhow::bail!("Security: empty path is not allowed");
    }

    let relative = Path::new(path);
    let mut resolved = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => anyhow::bail!(
                "Security: {} contains a parent directory reference. Paths must stay inside the storage root.",
                path
            ),
            Component::RootDir | Component::Prefix(_) => anyhow::bail!(
                "Security: {} is an absolute path. Paths must be relative to the storage root.",
                path
            ),
        }
    }

    if resolved == root {
        anyhow::bail!("Security: {} does not name a file", path);
    }

    Ok(resolved)
}

/// Validates that no existing directory between `root` and `path` is a symbolic link
///
/// # Security
/// A symlinked directory inside the storage root would let a relative path
/// reach files outside it. The final component is not checked; use
/// [`validate_not_symlink`] for that. Checking stops at the first component
/// that does not exist yet.
///
/// # Errors
/// Returns an error if `path` is not below `root`, if an ancestor is a
/// symbolic link, or if its metadata cannot be read
pub fn validate_no_symlinked_ancestors(root: &Path, path: &Path, operation: &str) -> Result<()> {
    let relative = path.strip_prefix(root).map_err(|_| {
        anyhow::anyhow!(
            "Security: {} is outside the storage root {}",
            path.display(),
            root.display()
        )
    })?;

    let mut current = root.to_path_buf();
    let mut components = relative.components().peekable();
    while let Some(component) = components.next() {
        if components.peek().is_none() {
            break;
        }
        current.push(component);
        match fs::symlink_metadata(&current) {
            Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, {} operations through symbolic links are not allowed.",
                current.display(),
                operation
            ),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => break,
            Err(e) => anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                current.display(),
                e
            ),
        }
    }

    Ok(())
}

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

use crate::ports::outbound::{ByteStream, FilesystemProvider};
use crate::shared::security::{
    resolve_within_root, validate_no_symlinked_ancestors, validate_not_symlink,
};
use crate::shared::Result;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// LocalFilesystemProvider - provider backed by a directory on disk
///
/// Paths are relative to the storage root and may not leave it.
/// Symbolic links, including symlinked directories on the way to a file,
/// are refused unless `follow_symlinks` is enabled.
#[derive(Debug, Clone)]
pub struct LocalFilesystemProvider {
    root: PathBuf,
    follow_symlinks: bool,
}

impl LocalFilesystemProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
        }
    }

    pub fn with_follow_symlinks(mut self, follow_symlinks: bool) -> Self {
        self.follow_symlinks = follow_symlinks;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str, operation: &str) -> Result<PathBuf> {
        let full_path = resolve_within_root(&self.root, path)?;
        if !self.follow_symlinks {
            validate_no_symlinked_ancestors(&self.root, &full_path, operation)?;
        }
        Ok(full_path)
    }

    fn check_symlink(&self, path: &Path, operation: &str) -> Result<()> {
        if self.follow_symlinks {
            return Ok(());
        }
        validate_not_symlink(path, operation)
    }
}

impl FilesystemProvider for LocalFilesystemProvider {
    fn read_stream(&self, path: &str) -> Result<ByteStream> {
        let full_path = self.resolve(path, "read")?;
        self.check_symlink(&full_path, "read")?;

        let metadata = fs::metadata(&full_path)
            .with_context(|| format!("Failed to read metadata of {}", full_path.display()))?;
        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", full_path.display());
        }

        let file = File::open(&full_path)
            .with_context(|| format!("Failed to open {}", full_path.display()))?;
        Ok(Box::new(file))
    }

    fn write_stream(&self, path: &str, stream: &mut dyn Read) -> Result<bool> {
        let full_path = self.resolve(path, "write")?;

        // Existing links are replaced, not written through
        if full_path.symlink_metadata().is_ok() {
            self.check_symlink(&full_path, "write")?;
        }

        let parent = full_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("{} has no parent directory", full_path.display()))?;
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;

        let mut temp = NamedTempFile::new_in(parent).with_context(|| {
            format!("Failed to create temporary file in {}", parent.display())
        })?;
        io::copy(stream, &mut temp)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        temp.as_file()
            .sync_all()
            .with_context(|| format!("Failed to flush {}", full_path.display()))?;
        temp.persist(&full_path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to move data into {}", full_path.display()))?;

        Ok(true)
    }

    fn delete(&self, path: &str) -> Result<bool> {
        let full_path = self.resolve(path, "delete")?;

        let metadata = match fs::symlink_metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to read metadata of {}", full_path.display())))
            }
        };

        if metadata.is_symlink() {
            self.check_symlink(&full_path, "delete")?;
        } else if metadata.is_dir() {
            anyhow::bail!("{} is a directory", full_path.display());
        }

        fs::remove_file(&full_path)
            .with_context(|| format!("Failed to delete {}", full_path.display()))?;
        Ok(true)
    }
}

use super::stream_resource::StreamResource;
use crate::shared::FilesystemError;

/// BackupFilesystem port - project-local storage interface
///
/// This is the interface a backup manager talks to. Implementations
/// must report every failure as one of the three [`FilesystemError`]
/// kinds, one per operation, so callers can handle failures uniformly
/// regardless of the storage behind it.
pub trait BackupFilesystem {
    /// Opens the file at `path` for reading
    ///
    /// # Errors
    /// Returns [`FilesystemError::ReadFailure`] if the file cannot be opened
    fn read_stream(&self, path: &str) -> Result<StreamResource, FilesystemError>;

    /// Stores the content of `resource` at `path`
    ///
    /// # Errors
    /// Returns [`FilesystemError::WriteFailure`] if the content was not stored
    fn write_stream(
        &self,
        path: &str,
        resource: &mut StreamResource,
    ) -> Result<(), FilesystemError>;

    /// Deletes the file at `path`
    ///
    /// # Errors
    /// Returns [`FilesystemError::DeleteFailure`] if the file was not deleted
    fn delete(&self, path: &str) -> Result<(), FilesystemError>;
}

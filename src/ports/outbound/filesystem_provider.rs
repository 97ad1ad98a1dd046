use super::stream_resource::ByteStream;
use crate::shared::Result;
use std::io::Read;
use std::sync::Arc;

/// FilesystemProvider port - the third-party filesystem capability set
///
/// This is the interface the filesystem adapter wraps. Providers signal
/// failure in two ways: by returning an error, or (for writes and deletes)
/// by answering `Ok(false)`. Only `Ok(true)` counts as success for the
/// latter two operations.
pub trait FilesystemProvider {
    /// Opens the file at `path` for reading
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened
    fn read_stream(&self, path: &str) -> Result<ByteStream>;

    /// Stores the content of `stream` at `path`
    ///
    /// # Returns
    /// `true` if the content was stored
    fn write_stream(&self, path: &str, stream: &mut dyn Read) -> Result<bool>;

    /// Deletes the file at `path`
    ///
    /// # Returns
    /// `true` if the file was deleted
    fn delete(&self, path: &str) -> Result<bool>;
}

impl<P: FilesystemProvider + ?Sized> FilesystemProvider for &P {
    fn read_stream(&self, path: &str) -> Result<ByteStream> {
        (**self).read_stream(path)
    }

    fn write_stream(&self, path: &str, stream: &mut dyn Read) -> Result<bool> {
        (**self).write_stream(path, stream)
    }

    fn delete(&self, path: &str) -> Result<bool> {
        (**self).delete(path)
    }
}

impl<P: FilesystemProvider + ?Sized> FilesystemProvider for Box<P> {
    fn read_stream(&self, path: &str) -> Result<ByteStream> {
        (**self).read_stream(path)
    }

    fn write_stream(&self, path: &str, stream: &mut dyn Read) -> Result<bool> {
        (**self).write_stream(path, stream)
    }

    fn delete(&self, path: &str) -> Result<bool> {
        (**self).delete(path)
    }
}

impl<P: FilesystemProvider + ?Sized> FilesystemProvider for Arc<P> {
    fn read_stream(&self, path: &str) -> Result<ByteStream> {
        (**self).read_stream(path)
    }

    fn write_stream(&self, path: &str, stream: &mut dyn Read) -> Result<bool> {
        (**self).write_stream(path, stream)
    }

    fn delete(&self, path: &str) -> Result<bool> {
        (**self).delete(path)
    }
}

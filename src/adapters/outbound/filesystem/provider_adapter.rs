use crate::ports::outbound::{BackupFilesystem, FilesystemProvider, StreamResource};
use crate::shared::FilesystemError;

/// FilesystemAdapter - implements the BackupFilesystem port over a provider
///
/// Every call is delegated to the injected provider and its outcome is
/// translated into the port's contract:
///
/// | provider answer | read          | write / delete             |
/// |-----------------|---------------|----------------------------|
/// | success         | `Ok(resource)`| `Ok(())` (only for `true`) |
/// | `Ok(false)`     | -             | failure, no cause          |
/// | `Err(e)`        | failure + `e` | failure + `e`              |
///
/// The adapter holds no state besides the provider and never retries.
#[derive(Debug, Clone)]
pub struct FilesystemAdapter<P> {
    provider: P,
}

impl<P: FilesystemProvider> FilesystemAdapter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the injected provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: FilesystemProvider> BackupFilesystem for FilesystemAdapter<P> {
    fn read_stream(&self, path: &str) -> Result<StreamResource, FilesystemError> {
        self.provider
            .read_stream(path)
            .map(StreamResource::new)
            .map_err(|e| FilesystemError::ReadFailure {
                path: path.to_string(),
                source: e.into(),
            })
    }

    fn write_stream(
        &self,
        path: &str,
        resource: &mut StreamResource,
    ) -> Result<(), FilesystemError> {
        match self.provider.write_stream(path, resource.resource_mut()) {
            Ok(true) => Ok(()),
            Ok(false) => Err(FilesystemError::WriteFailure {
                path: path.to_string(),
                source: None,
            }),
            Err(e) => Err(FilesystemError::WriteFailure {
                path: path.to_string(),
                source: Some(e.into()),
            }),
        }
    }

    fn delete(&self, path: &str) -> Result<(), FilesystemError> {
        match self.provider.delete(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(FilesystemError::DeleteFailure {
                path: path.to_string(),
                source: None,
            }),
            Err(e) => Err(FilesystemError::DeleteFailure {
                path: path.to_string(),
                source: Some(e.into()),
            }),
        }
    }
}

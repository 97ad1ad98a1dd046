use crate::ports::outbound::{ByteStream, FilesystemProvider};
use crate::shared::Result;
use anyhow::Context;
use dashmap::DashMap;
use std::io::{Cursor, Read};

/// InMemoryFilesystemProvider - provider backed by a concurrent map
///
/// Useful for tests and ephemeral storage. Paths are used verbatim as keys;
/// there are no directories.
#[derive(Debug, Default)]
pub struct InMemoryFilesystemProvider {
    files: DashMap<String, Vec<u8>>,
}

impl InMemoryFilesystemProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file
    pub fn with_file(self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.to_string(), contents.into());
        self
    }

    /// Returns a copy of the stored bytes
    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.get(path).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FilesystemProvider for InMemoryFilesystemProvider {
    fn read_stream(&self, path: &str) -> Result<ByteStream> {
        let contents = self
            .contents(path)
            .ok_or_else(|| anyhow::anyhow!("File not found: {}", path))?;
        Ok(Box::new(Cursor::new(contents)))
    }

    fn write_stream(&self, path: &str, stream: &mut dyn Read) -> Result<bool> {
        let mut buffer = Vec::new();
        stream
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read input stream for {}", path))?;
        self.files.insert(path.to_string(), buffer);
        Ok(true)
    }

    fn delete(&self, path: &str) -> Result<bool> {
        Ok(self.files.remove(path).is_some())
    }
}

use std::io::{Cursor, Read};
use std::sync::{Arc, Mutex};
use backup_manager_fs::prelude::*;

/// Scripted answer for a write or delete call
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Answer `Ok(true)`
    Succeed,
    /// Answer `Ok(false)`
    Refuse,
    /// Answer `Err` with the given message
    Fail(String),
}

impl MockOutcome {
    fn answer(&self) -> Result<bool> {
        match self {
            MockOutcome::Succeed => Ok(true),
            MockOutcome::Refuse => Ok(false),
            MockOutcome::Fail(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

/// A call received by the mock, with the bytes it was handed on writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    ReadStream(String),
    WriteStream { path: String, content: Vec<u8> },
    Delete(String),
}

/// Mock FilesystemProvider for testing that records every call
pub struct MockFilesystemProvider {
    pub read_content: Vec<u8>,
    pub read_failure: Option<String>,
    pub write_outcome: MockOutcome,
    pub delete_outcome: MockOutcome,
    pub calls: Arc<Mutex<Vec<ProviderCall>>>,
}

impl MockFilesystemProvider {
    pub fn new() -> Self {
        Self {
            read_content: Vec::new(),
            read_failure: None,
            write_outcome: MockOutcome::Succeed,
            delete_outcome: MockOutcome::Succeed,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_read_content(mut self, content: &str) -> Self {
        self.read_content = content.as_bytes().to_vec();
        self
    }

    pub fn with_read_failure(mut self, message: &str) -> Self {
        self.read_failure = Some(message.to_string());
        self
    }

    pub fn with_write_outcome(mut self, outcome: MockOutcome) -> Self {
        self.write_outcome = outcome;
        self
    }

    pub fn with_delete_outcome(mut self, outcome: MockOutcome) -> Self {
        self.delete_outcome = outcome;
        self
    }

    pub fn get_calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ProviderCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockFilesystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FilesystemProvider for MockFilesystemProvider {
    fn read_stream(&self, path: &str) -> Result<ByteStream> {
        self.record(ProviderCall::ReadStream(path.to_string()));
        if let Some(ref message) = self.read_failure {
            anyhow::bail!("{}", message);
        }
        Ok(Box::new(Cursor::new(self.read_content.clone())))
    }

    fn write_stream(&self, path: &str, stream: &mut dyn Read) -> Result<bool> {
        let mut content = Vec::new();
        stream.read_to_end(&mut content)?;
        self.record(ProviderCall::WriteStream {
            path: path.to_string(),
            content,
        });
        self.write_outcome.answer()
    }

    fn delete(&self, path: &str) -> Result<bool> {
        self.record(ProviderCall::Delete(path.to_string()));
        self.delete_outcome.answer()
    }
}

/// Mock implementations for testing
mod mock_filesystem_provider;

pub use mock_filesystem_provider::{MockFilesystemProvider, MockOutcome, ProviderCall};

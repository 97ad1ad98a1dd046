/// Filesystem adapters: the port adapter and the providers it can wrap
mod in_memory_provider;
mod local_provider;
mod provider_adapter;

pub use in_memory_provider::InMemoryFilesystemProvider;
pub use local_provider::LocalFilesystemProvider;
pub use provider_adapter::FilesystemAdapter;

/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the storage interface backup code depends on,
/// the provider capability set it is implemented over, and status reporting.
pub mod backup_filesystem;
pub mod filesystem_provider;
pub mod progress_reporter;
pub mod stream_resource;

pub use backup_filesystem::BackupFilesystem;
pub use filesystem_provider::FilesystemProvider;
pub use progress_reporter::ProgressReporter;
pub use stream_resource::{ByteStream, StreamResource};

//! backup-manager-fs - filesystem adapter for backup managers
//!
//! This library exposes a small storage port (`BackupFilesystem`) with three
//! operations: read a stream, write a stream, delete a file. The port is
//! implemented by `FilesystemAdapter` over any injected `FilesystemProvider`,
//! and every provider failure is translated into exactly one of three error
//! kinds so callers can handle storage failures uniformly.
//!
//! # Architecture
//!
//! - **Ports** (`ports`): the storage port, the provider capability set, and
//!   the `StreamResource` carrier
//! - **Adapters** (`adapters`): the provider-backed adapter, local and
//!   in-memory providers, console reporting
//! - **Shared** (`shared`): error types and security helpers
//! - **Config** (`config`): YAML configuration for the `backup-fs` binary
//!
//! # Example
//!
//! ```no_run
//! use backup_manager_fs::prelude::*;
//! use std::io::{Cursor, Read};
//!
//! # fn main() -> Result<()> {
//! let filesystem = FilesystemAdapter::new(LocalFilesystemProvider::new("/var/backups"));
//!
//! let mut dump = StreamResource::from_reader(Cursor::new(b"-- dump".to_vec()));
//! filesystem.write_stream("daily/db.sql", &mut dump)?;
//!
//! let mut content = String::new();
//! filesystem.read_stream("daily/db.sql")?.read_to_string(&mut content)?;
//!
//! filesystem.delete("daily/db.sql")?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FilesystemAdapter, InMemoryFilesystemProvider, LocalFilesystemProvider,
    };
    pub use crate::ports::outbound::{
        BackupFilesystem, ByteStream, FilesystemProvider, ProgressReporter, StreamResource,
    };
    pub use crate::shared::{FilesystemError, Result};
}

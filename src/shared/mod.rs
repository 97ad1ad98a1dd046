/// Shared kernel - error types, result alias and security helpers
pub mod error;
pub mod result;
pub mod security;

pub use error::{BoxError, ExitCode, FilesystemError};
pub use result::Result;

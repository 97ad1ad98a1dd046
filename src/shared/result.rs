/// Result alias used by providers and the application layer.
///
/// Providers may fail with any error; the filesystem adapter narrows
/// these down to `FilesystemError` at the port boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

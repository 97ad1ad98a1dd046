/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the storage port offered to backup
/// code, the provider capability set behind it, and progress reporting.
pub mod outbound;

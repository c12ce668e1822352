//! Key-value port for the persisted task snapshot.

use super::PortError;

/// A string-keyed blob store supplied by the host environment.
///
/// The task store reads and writes a single key holding the JSON snapshot.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PortError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn set(&self, key: &str, value: &str) -> Result<(), PortError>;
}

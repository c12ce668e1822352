//! ID generator port for producing task identifiers.

/// Generates opaque task identifiers.
///
/// The store does not trust the generator to be collision-free; it retries
/// until the returned ID is unused.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier string.
    fn generate_id(&self) -> String;
}

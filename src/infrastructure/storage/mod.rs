pub mod file_store;
pub mod memory_store;

pub use file_store::FileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Local key-value storage holding opaque blobs.
///
/// Implementations must apply writes in call order; a `set` that returns has
/// replaced whatever an earlier `set` wrote for the same key.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing was ever stored under `key`
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

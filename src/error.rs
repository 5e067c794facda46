//! Error types for the diagnostic and its client library

use thiserror::Error;

/// Result type alias for client and catalog operations
pub type Result<T> = std::result::Result<T, DoctorError>;

/// Error types that can occur while building a client or touching a collection
#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid collection name: {name}")]
    InvalidCollectionName { name: String },

    #[error("Collection not found: {name}")]
    CollectionNotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    /// Anything the remote client reports, with its full cause chain.
    #[error("Client error: {0:#}")]
    ClientError(#[from] anyhow::Error),
}

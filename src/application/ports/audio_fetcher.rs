use std::io;
use std::path::Path;

use crate::domain::ShareLocation;

/// Retrieves one remote audio file into a local destination.
///
/// Implementations own the remote handle and transport for the duration of a
/// single call and must release both on every exit path.
#[async_trait::async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Copy the remote file to `destination`, returning the byte count.
    async fn fetch(&self, location: &ShareLocation, destination: &Path)
        -> Result<u64, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("share unavailable: {0}")]
    Share(String),
    #[error("remote file not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    Read(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

use std::path::Path;

use crate::application::ports::{AudioFetcher, FetchError};
use crate::domain::ShareLocation;

enum Behavior {
    Deliver(Vec<u8>),
    NotFound,
    Fail(String),
}

/// Canned fetcher for tests: delivers a fixed payload or a fixed failure.
pub struct MockAudioFetcher {
    behavior: Behavior,
}

impl MockAudioFetcher {
    pub fn delivering(payload: Vec<u8>) -> Self {
        Self {
            behavior: Behavior::Deliver(payload),
        }
    }

    pub fn not_found() -> Self {
        Self {
            behavior: Behavior::NotFound,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(message.into()),
        }
    }
}

#[async_trait::async_trait]
impl AudioFetcher for MockAudioFetcher {
    async fn fetch(
        &self,
        location: &ShareLocation,
        destination: &Path,
    ) -> Result<u64, FetchError> {
        match &self.behavior {
            Behavior::Deliver(payload) => {
                tokio::fs::write(destination, payload).await?;
                Ok(payload.len() as u64)
            }
            Behavior::NotFound => Err(FetchError::NotFound(location.file_path().to_string())),
            Behavior::Fail(message) => Err(FetchError::Read(message.clone())),
        }
    }
}

use std::fs::File;
use std::io;
use std::path::Path;

use pavao::{SmbClient, SmbCredentials, SmbError, SmbOpenOptions, SmbOptions};

use crate::application::ports::{AudioFetcher, FetchError};
use crate::domain::ShareLocation;

use super::chunked_read::copy_chunked;

/// `AudioFetcher` backed by an SMB client.
///
/// Each fetch builds its own client, so connection state is never shared
/// across requests. The session, tree connection and file handle all live
/// inside one blocking closure and are released when it unwinds, success or
/// not.
pub struct SmbAudioFetcher;

impl SmbAudioFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SmbAudioFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AudioFetcher for SmbAudioFetcher {
    async fn fetch(
        &self,
        location: &ShareLocation,
        destination: &Path,
    ) -> Result<u64, FetchError> {
        let location = location.clone();
        let destination = destination.to_path_buf();

        tokio::task::spawn_blocking(move || fetch_blocking(&location, &destination))
            .await
            .map_err(|e| FetchError::Read(format!("fetch task failed: {}", e)))?
    }
}

fn fetch_blocking(location: &ShareLocation, destination: &Path) -> Result<u64, FetchError> {
    let server = location.server_uri();
    let share = location.share_root();
    let remote_path = location.normalized_path();

    tracing::debug!(
        server = %server,
        share = %share,
        path = %remote_path,
        "Connecting to SMB share"
    );

    let client = SmbClient::new(
        SmbCredentials::default()
            .server(&server)
            .share(&share)
            .username(location.username())
            .password(location.password()),
        SmbOptions::default().one_share_per_server(true),
    )
    .map_err(|e| FetchError::Connection(e.to_string()))?;

    let mut remote = client
        .open_with(&remote_path, SmbOpenOptions::default().read(true))
        .map_err(|e| open_error(e, location))?;

    let mut dest = File::create(destination)?;
    let bytes = copy_chunked(&mut remote, &mut dest)?;

    tracing::debug!(bytes, "SMB fetch complete");
    Ok(bytes)
}

fn open_error(err: SmbError, location: &ShareLocation) -> FetchError {
    match err {
        SmbError::Io(e) if e.kind() == io::ErrorKind::NotFound => {
            FetchError::NotFound(location.file_path().to_string())
        }
        SmbError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            FetchError::Authentication(e.to_string())
        }
        other => FetchError::Share(other.to_string()),
    }
}

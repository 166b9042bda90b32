use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Uniquely named staging path for one request's fetched audio bytes.
///
/// The file is removed when the guard drops, whichever way the request
/// ended. Concurrent requests never collide: every guard gets a fresh UUID.
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub fn allocate(dir: &Path) -> Result<Self, io::Error> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("fetch-{}.audio", Uuid::new_v4()));
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            // Nothing was staged yet if the fetch never started.
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file");
            }
        }
    }
}

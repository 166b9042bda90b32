use std::fmt;

/// Where to find one audio file on an SMB share, with the credentials to
/// reach it. Built per request and never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct ShareLocation {
    host: String,
    share: String,
    username: String,
    password: String,
    file_path: String,
}

impl ShareLocation {
    pub fn new(
        host: impl Into<String>,
        share: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            share: share.into(),
            username: username.into(),
            password: password.into(),
            file_path: file_path.into(),
        }
    }

    /// Bare host name. Accepts `smb://host/...` input and reduces it to `host`.
    pub fn host(&self) -> &str {
        let host = self.host.strip_prefix("smb://").unwrap_or(&self.host);
        host.split('/').next().unwrap_or(host)
    }

    /// Server URI in the form the SMB client expects.
    pub fn server_uri(&self) -> String {
        format!("smb://{}", self.host())
    }

    /// Share component as an absolute path, `/share`.
    pub fn share_root(&self) -> String {
        format!("/{}", self.share.trim_matches('/'))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// File path normalized to the client's separator convention: forward
    /// slashes, one leading slash, backslash input accepted.
    pub fn normalized_path(&self) -> String {
        let path = self.file_path.replace('\\', "/");
        format!("/{}", path.trim_start_matches('/'))
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

// Credentials must never reach logs in cleartext.
impl fmt::Debug for ShareLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareLocation")
            .field("host", &self.host)
            .field("share", &self.share)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("file_path", &self.file_path)
            .finish()
    }
}

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::RwLock;

use tracing::debug;
use tracing::warn;

use crate::error::SessionError;
use crate::model::Session;

/// Holds the current session. Remembered sessions are also written to disk so the
/// next run starts logged in; the others live only as long as the process.
#[derive(Debug, Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Session>>>,
    file: PathBuf,
}

impl SessionStore {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            file: file.into(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Restores a session persisted by an earlier run. Expired sessions are dropped.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.file.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file)?;
        let session: Session = serde_json::from_str(&content)?;
        if session.is_expired(chrono::Utc::now()) {
            debug!("session_expired::{}", session.login);
            self.clear();
            return Ok(None);
        }
        self.set(Some(session.clone()));
        Ok(Some(session))
    }

    pub fn store(&self, session: &Session, remember: bool) -> Result<(), SessionError> {
        self.set(Some(session.clone()));
        if remember {
            if let Some(parent) = self.file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            write_private(&self.file, serde_json::to_string_pretty(session)?.as_bytes())?;
        } else if self.file.exists() {
            // a non-remembered login replaces whatever was remembered before
            std::fs::remove_file(&self.file)?;
        }
        Ok(())
    }

    pub fn current(&self) -> Option<Session> {
        match self.current.read() {
            Ok(guard) => (*guard).clone(),
            Err(poisoned) => (*poisoned.into_inner()).clone(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.current().map(|session| session.token)
    }

    /// Forgets the session, in memory and on disk.
    pub fn clear(&self) {
        self.set(None);
        if self.file.exists() {
            if let Err(e) = std::fs::remove_file(&self.file) {
                warn!("failed_to_remove_session_file::{}::{}", self.file.display(), e);
            }
        }
    }

    fn set(&self, session: Option<Session>) {
        match self.current.write() {
            Ok(mut guard) => *guard = session,
            Err(poisoned) => *poisoned.into_inner() = session,
        }
    }
}

// The file holds a bearer token: owner read/write only.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        use std::os::unix::fs::PermissionsExt;

        options.mode(0o600);
        let mut file = options.open(path)?;
        // mode only applies on creation
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(contents)
    }
    #[cfg(not(unix))]
    {
        options.open(path)?.write_all(contents)
    }
}

//! Durable token storage.
//!
//! One key, one file: the bearer token lives in a single file under the
//! client's state directory. An absent file is the canonical "logged out"
//! signal on load. Nothing else is ever persisted here; in particular the
//! password never touches disk.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

const TOKEN_FILE: &str = "token";

#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_FILE),
        }
    }

    /// Create a store at the default location.
    ///
    /// Uses `PULSEGATE_HOME` when set, otherwise `~/.pulsegate`.
    pub fn from_env() -> Self {
        let dir = std::env::var("PULSEGATE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".pulsegate")
            });
        Self::new(dir)
    }

    /// Read the stored token. `None` means logged out.
    pub async fn load(&self) -> Result<Option<String>, io::Error> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Persist the token, replacing any previous one.
    pub async fn save(&self, token: &str) -> Result<(), io::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, token).await
    }

    /// Remove the stored token. Idempotent: clearing an empty store is fine.
    pub async fn clear(&self) -> Result<(), io::Error> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

//! Credential storage
//!
//! Access and refresh tokens live in an injected [`CredentialStore`]. The API
//! client only reads from it; login/logout flows in the UI write and clear it.

use crate::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use shared::client::TokenPair;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;

/// Token slot in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Storage key shared with the web front-end
    pub fn storage_key(&self) -> &'static str {
        match self {
            TokenKind::Access => "accessToken",
            TokenKind::Refresh => "refreshToken",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// Process-wide token storage
pub trait CredentialStore: Send + Sync + fmt::Debug {
    fn get(&self, kind: TokenKind) -> ClientResult<Option<String>>;
    fn set(&self, kind: TokenKind, token: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;

    /// Store both tokens from a login response
    fn set_tokens(&self, tokens: &TokenPair) -> ClientResult<()> {
        self.set(TokenKind::Access, &tokens.access)?;
        self.set(TokenKind::Refresh, &tokens.refresh)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    tokens: RwLock<HashMap<TokenKind, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the given tokens
    pub fn with_tokens(access: Option<&str>, refresh: Option<&str>) -> Self {
        let mut tokens = HashMap::new();
        if let Some(t) = access {
            tokens.insert(TokenKind::Access, t.to_string());
        }
        if let Some(t) = refresh {
            tokens.insert(TokenKind::Refresh, t.to_string());
        }
        Self {
            tokens: RwLock::new(tokens),
        }
    }
}

fn poisoned<T>(_: T) -> ClientError {
    ClientError::Credential("credential store lock poisoned".into())
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, kind: TokenKind) -> ClientResult<Option<String>> {
        let tokens = self.tokens.read().map_err(poisoned)?;
        Ok(tokens.get(&kind).cloned())
    }

    fn set(&self, kind: TokenKind, token: &str) -> ClientResult<()> {
        let mut tokens = self.tokens.write().map_err(poisoned)?;
        tokens.insert(kind, token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        self.tokens.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

/// On-disk token file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(rename = "refreshToken", skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Credentials {
    fn slot(&mut self, kind: TokenKind) -> &mut Option<String> {
        match kind {
            TokenKind::Access => &mut self.access_token,
            TokenKind::Refresh => &mut self.refresh_token,
        }
    }
}

/// JSON file store, survives restarts
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: RwLock<()>,
}

impl FileCredentialStore {
    /// Store at `base_path/filename`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self {
            path,
            lock: RwLock::new(()),
        }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Load the file; a missing file is an empty store
    pub fn load(&self) -> ClientResult<Credentials> {
        if !self.path.exists() {
            return Ok(Credentials::default());
        }
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| {
            ClientError::Credential(format!(
                "corrupt credential file {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Replace the file atomically: write a sibling temp file, then rename it over
    fn save(&self, credentials: &Credentials) -> ClientResult<()> {
        let dir = self.dir();
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(credentials)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, kind: TokenKind) -> ClientResult<Option<String>> {
        let _guard = self.lock.read().map_err(poisoned)?;
        let mut credentials = self.load()?;
        Ok(credentials.slot(kind).take())
    }

    fn set(&self, kind: TokenKind, token: &str) -> ClientResult<()> {
        let _guard = self.lock.write().map_err(poisoned)?;
        let mut credentials = self.load()?;
        *credentials.slot(kind) = Some(token.to_string());
        self.save(&credentials)
    }

    fn clear(&self) -> ClientResult<()> {
        let _guard = self.lock.write().map_err(poisoned)?;
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        tracing::debug!(path = %self.path.display(), "Credential file removed");
        Ok(())
    }
}

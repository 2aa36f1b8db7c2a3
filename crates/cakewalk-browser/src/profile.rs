use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Manages the Chrome profile directory backing a session.
///
/// A temporary profile guarantees a pristine first visit (the site shows its
/// cookie-consent banner); a named profile keeps login/consent state between
/// runs under `~/.cakewalk/profiles/<name>`.
pub struct ProfileManager {
    path: PathBuf,
    is_temporary: bool,
}

impl ProfileManager {
    /// Create a scratch profile that is deleted on drop.
    pub fn temporary() -> Result<Self> {
        let temp_dir = tempfile::tempdir().map_err(|e| Error::Io(e.into()))?;

        Ok(Self {
            path: temp_dir.keep(),
            is_temporary: true,
        })
    }

    /// Create or reuse the named profile under `~/.cakewalk/profiles`.
    pub fn named(name: &str) -> Result<Self> {
        let path = dirs::home_dir()
            .ok_or_else(|| Error::Browser("Could not determine home directory".to_string()))?
            .join(".cakewalk")
            .join("profiles")
            .join(name);

        Self::persistent(path)
    }

    /// Create or reuse a persistent profile at a caller-chosen path.
    pub fn persistent(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(Error::Io)?;
        }

        Ok(Self {
            path,
            is_temporary: false,
        })
    }

    /// The profile directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this profile is deleted on drop.
    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }
}

impl Drop for ProfileManager {
    fn drop(&mut self) {
        if self.is_temporary && self.path.exists() {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}

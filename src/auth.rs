//! Credential gate
//!
//! A single hardcoded admin credential pair and a durable boolean-as-string
//! flag file. Suitable only because this is a single-user local tool: no
//! hashing, no session expiry, no lockout.

use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

/// File-backed authentication flag
pub struct AuthGate {
    flag_path: PathBuf,
}

impl AuthGate {
    /// Use the flag file at `path` (created on successful login)
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            flag_path: path.as_ref().to_path_buf(),
        }
    }

    /// Check credentials; on success persist the flag and return true,
    /// on mismatch return false with no state change.
    pub fn login(&self, username: &str, password: &str) -> Result<bool> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            return Ok(false);
        }
        if let Some(parent) = self.flag_path.parent() {
            fs::create_dir_all(parent).context("Failed to create auth directory")?;
        }
        fs::write(&self.flag_path, "true").context("Failed to write auth flag")?;
        info!("Login succeeded");
        Ok(true)
    }

    /// Clear the flag
    pub fn logout(&self) -> Result<()> {
        if self.flag_path.exists() {
            fs::remove_file(&self.flag_path).context("Failed to remove auth flag")?;
            info!("Logged out");
        }
        Ok(())
    }

    /// Whether a previous login persisted the flag
    pub fn is_authenticated(&self) -> bool {
        fs::read_to_string(&self.flag_path)
            .map(|raw| raw.trim() == "true")
            .unwrap_or(false)
    }
}

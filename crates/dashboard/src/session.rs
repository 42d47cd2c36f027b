//! Session store: the logged-in operator, persisted to a single JSON file.
//!
//! Login resolves a typed-in email against the fetched user list with a
//! case-insensitive exact match, first match in list order. The matched
//! record is the one durable piece of client state; it survives restarts
//! under the configured session path. A corrupt or missing file is treated
//! as "not logged in", never as a fatal error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::gateway::{ApiClient, GatewayError};
use crate::models::Customer;

/// Errors that can occur during login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No fetched record matches the typed-in email.
    #[error("invalid email: no matching customer record")]
    InvalidCredentials,

    /// The user-list fetch failed.
    #[error("network error: {0}")]
    Network(#[from] GatewayError),

    /// The session file could not be written.
    #[error("session storage error: {0}")]
    Storage(#[from] io::Error),
}

/// Holds the authenticated operator and mirrors it to disk.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    user: Option<Customer>,
}

impl SessionStore {
    /// Restore the session from disk.
    ///
    /// Missing or corrupt data is treated as absent.
    pub fn restore(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let user = read_stored_user(&path);
        if let Some(user) = &user {
            debug!(customer_id = %user.id, "session restored");
        }
        Self { path, user }
    }

    /// Whether an operator is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in operator, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&Customer> {
        self.user.as_ref()
    }

    /// Log in by email.
    ///
    /// Fetches the user list through the gateway and takes the first
    /// case-insensitive exact match. On success the record is persisted
    /// before the in-memory session is updated, so a failed write leaves
    /// prior state untouched.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when no record matches,
    /// [`AuthError::Network`] when the fetch fails,
    /// [`AuthError::Storage`] when persisting fails. Prior session state is
    /// untouched in every error case.
    pub async fn login(
        &mut self,
        email: &str,
        gateway: &ApiClient,
    ) -> Result<&Customer, AuthError> {
        let users = gateway.get_users().await?;
        let user = resolve(users, email).ok_or(AuthError::InvalidCredentials)?;
        self.persist(&user)?;
        debug!(customer_id = %user.id, "login succeeded");
        Ok(&*self.user.insert(user))
    }

    /// Log out: clear the session and remove the persisted record.
    ///
    /// Never fails from the caller's view; a removal error (other than the
    /// file already being gone) is logged.
    pub fn logout(&mut self) {
        self.user = None;
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("session file removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("failed to remove session file: {e}"),
        }
    }

    fn persist(&self, user: &Customer) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }
}

/// First case-insensitive exact email match, in list order.
fn resolve(users: Vec<Customer>, email: &str) -> Option<Customer> {
    users
        .into_iter()
        .find(|user| user.email.matches_ignore_case(email))
}

fn read_stored_user(path: &Path) -> Option<Customer> {
    let bytes = fs::read(path).ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("ignoring corrupt session file: {e}");
            None
        }
    }
}

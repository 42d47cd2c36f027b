//! Unified application error type.
//!
//! Subsystem errors stay typed at their seams; this enum is what the CLI
//! layer reports to the operator. Gateway failures are transient messages,
//! never crashes, and nothing here retries automatically.

use thiserror::Error;

use crate::commerce::CommerceError;
use crate::config::ConfigError;
use crate::gateway::GatewayError;
use crate::session::AuthError;

/// Application-level error type for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A mock API call failed.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Login failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// A cart or checkout operation was refused.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// An operation that needs a session was attempted while logged out.
    #[error("not logged in; run `radm login --email <email>` first")]
    NotAuthenticated,
}

//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Remote-sync status of a locally staged order.
///
/// Orders are committed locally first and then synced to the remote API
/// best-effort. A failed sync is recorded, never silently dropped, so the
/// operator can retry it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Staged locally, remote submission not yet attempted.
    #[default]
    Pending,
    /// Remote submission succeeded.
    Confirmed,
    /// Remote submission failed; eligible for retry.
    FailedNeedsRetry,
}

impl OrderStatus {
    /// Whether this order still needs a (re-)submission attempt.
    #[must_use]
    pub const fn needs_sync(&self) -> bool {
        matches!(self, Self::Pending | Self::FailedNeedsRetry)
    }
}

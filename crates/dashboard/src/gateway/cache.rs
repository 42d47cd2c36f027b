//! Cache types for mock API responses.
//!
//! Keys carry the endpoint plus its parameters; each key belongs to a tag
//! so that a mutation can drop every cached read of the same resource.

use std::sync::Arc;

use crate::models::Customer;

use super::types::PhotoRecord;

/// Cache key: endpoint + parameters.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Users,
    User(i64),
    Photos { limit: u32 },
}

impl CacheKey {
    /// The invalidation tag this key belongs to.
    pub const fn tag(&self) -> CacheTag {
        match self {
            Self::Users | Self::User(_) => CacheTag::Users,
            Self::Photos { .. } => CacheTag::Photos,
        }
    }
}

/// Invalidation tag grouping cache keys by the resource they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTag {
    Users,
    Photos,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Users(Arc<Vec<Customer>>),
    User(Arc<Customer>),
    Photos(Arc<Vec<PhotoRecord>>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_keys_share_the_users_tag() {
        assert_eq!(CacheKey::Users.tag(), CacheTag::Users);
        assert_eq!(CacheKey::User(3).tag(), CacheTag::Users);
        assert_eq!(CacheKey::Photos { limit: 50 }.tag(), CacheTag::Photos);
    }
}

//! In-memory ledgers: ordered collections of entities with CRUD operations.
//!
//! Both ledgers share the guarded-hydrate convention: an initial remote
//! fetch populates them only while they are empty, so a stale refetch never
//! clobbers local edits. Missing-id mutations are benign no-ops throughout,
//! because "record already gone" is not an error in this system.

pub mod catalog;
pub mod customers;

pub use catalog::{CatalogLedger, StockError};
pub use customers::CustomerLedger;

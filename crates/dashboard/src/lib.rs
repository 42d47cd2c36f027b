//! Retail Admin dashboard library.
//!
//! Everything the CLI front end needs to manage customers, browse the
//! catalog, and run point-of-sale checkouts against the mock REST API:
//!
//! - [`gateway`] - The sole network component; wraps the mock API with a
//!   cached, tag-invalidated HTTP client
//! - [`session`] - Logged-in operator, persisted to a single JSON file
//! - [`ledger`] - In-memory customer and catalog ledgers
//! - [`commerce`] - Cart, order staging, and the checkout state machine
//! - [`state`] - The application-state root that owns all of the above
//!
//! There is no hidden global state: [`state::AppState`] is constructed once
//! at startup and passed by reference to whoever needs it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commerce;
pub mod config;
pub mod error;
pub mod gateway;
pub mod ledger;
pub mod models;
pub mod seed;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::AppError;
pub use state::AppState;

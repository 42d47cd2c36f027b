//! Command handlers for the Retail Admin CLI.

pub mod auth;
pub mod catalog;
pub mod customers;
pub mod pos;

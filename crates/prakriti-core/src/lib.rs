//! prakriti-core
//!
//! Pure domain types and store-key conventions. No I/O: this is the shared
//! vocabulary of the Prakriti assessment system.

pub mod error;
pub mod models;
pub mod store_keys;

//! prakriti-storage
//!
//! Local key-value persistence for in-flight and recently completed
//! assessments. The store is a trait so callers can swap the on-disk cache
//! for an in-memory one.

pub mod error;
pub mod handoff;
pub mod progress;
pub mod state;
pub mod store;

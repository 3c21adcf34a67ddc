//! exercises-core
//!
//! Pure domain types for the exercise catalog: store records, enriched
//! response shapes, response envelopes, error codes, and configuration.
//! No AWS SDK dependency.

pub mod config;
pub mod error;
pub mod models;

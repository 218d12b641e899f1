//! sportsmind-core
//!
//! Pure domain types and storage key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the SportsMind system.

pub mod error;
pub mod models;
pub mod s3_keys;

//! sportsmind-storage
//!
//! JSON document persistence. Objects live in S3 in production and in an
//! in-process map for local runs and tests.

pub mod client;
pub mod error;
pub mod objects;
pub mod repository;
pub mod store;

//! # madrasa-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the madrasa office records.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

//! # madrasa-cache
//!
//! Cache provider implementations for the madrasa office. Record lists are
//! cached per (kind, madrasa) in an in-process [moka](https://crates.io/crates/moka)
//! cache and invalidated after every successful mutation.
//!
//! The provider is selected at runtime based on configuration.

pub mod keys;
pub mod memory;
pub mod provider;

pub use provider::CacheManager;

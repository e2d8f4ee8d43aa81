//! Core traits defined in `madrasa-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;

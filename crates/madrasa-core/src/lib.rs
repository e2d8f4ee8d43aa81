//! # madrasa-core
//!
//! Core crate for the madrasa office service. Contains configuration
//! schemas, the unified error system, and the traits that other crates
//! implement (cache providers).
//!
//! This crate has **no** internal dependencies on other madrasa crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;

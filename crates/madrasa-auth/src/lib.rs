//! # madrasa-auth
//!
//! Verifies the HS256 access tokens issued by the identity provider and
//! extracts the acting user's id and login email.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder};

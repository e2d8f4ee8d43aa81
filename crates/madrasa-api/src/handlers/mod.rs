//! HTTP request handlers.

pub mod health;
pub mod invitation;
pub mod record;

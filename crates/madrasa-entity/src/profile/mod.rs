//! Actor profiles.

pub mod model;

pub use model::Profile;

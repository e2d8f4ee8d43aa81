//! Staff domain entities.

pub mod model;
pub mod status;

pub use model::{CreateStaff, StaffMember, UpdateStaff};
pub use status::StaffStatus;

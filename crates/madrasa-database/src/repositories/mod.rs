//! Repository implementations for madrasa office entities.

pub mod invitation;
pub mod profile;
pub mod record;

pub use invitation::InvitationRepository;
pub use profile::ProfileRepository;
pub use record::RecordRepository;

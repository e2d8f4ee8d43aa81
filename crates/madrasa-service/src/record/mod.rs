//! Generic CRUD over madrasa-scoped records.

pub mod service;

pub use service::RecordService;

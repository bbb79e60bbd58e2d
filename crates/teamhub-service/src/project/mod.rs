//! Projects and memberships.

pub mod service;

pub use service::ProjectService;

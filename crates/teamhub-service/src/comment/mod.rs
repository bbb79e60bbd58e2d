//! Comments on files.

pub mod service;

pub use service::CommentService;

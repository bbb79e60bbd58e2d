//! File services: upload, download, classification, and version history.

pub mod classify;
pub mod service;
pub mod version;

pub use classify::{classify_file_type, content_type_for};
pub use service::{FileDownload, FileService, FileUpload};
pub use version::VersionService;

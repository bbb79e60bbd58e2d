//! File domain entities.

pub mod model;
pub mod version;

pub use model::{CreatedFile, File, FileWithUploader, NewFile};
pub use version::{
    ACTION_UPDATED, ACTION_UPLOADED, FileVersion, FileVersionWithAuthor, NewFileVersion,
};

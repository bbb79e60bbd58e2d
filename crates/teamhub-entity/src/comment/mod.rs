//! Comment entities.

pub mod model;

pub use model::{Comment, CommentDetail, CommentWithAuthor, NewComment};

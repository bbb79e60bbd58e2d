//! User domain entities.

pub mod model;
pub mod summary;

pub use model::{NewUser, User};
pub use summary::UserSummary;

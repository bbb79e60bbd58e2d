//! Project and membership entities.

pub mod member;
pub mod model;

pub use member::{
    DEFAULT_MEMBER_ROLE, EnrolledUser, NewProjectMember, ProjectMember, ProjectMemberDetail,
};
pub use model::{NewProject, Project};

//! Team listing: project members with their contribution figures.

pub mod service;

pub use service::{TeamMember, TeamService};

//! Post-commit event publication.

pub mod bus;

pub use bus::EventBus;

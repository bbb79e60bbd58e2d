//! Core traits defined in `teamhub-core` and implemented by other crates.

pub mod observer;
pub mod storage;

pub use observer::EventObserver;
pub use storage::ContentStore;

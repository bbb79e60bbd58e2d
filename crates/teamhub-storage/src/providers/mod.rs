//! Content store implementations.

pub mod local;
pub mod memory;

pub use local::LocalContentStore;
pub use memory::MemoryContentStore;

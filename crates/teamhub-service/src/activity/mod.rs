//! Activity feed: the recorder that appends it and the service that reads it.

pub mod recorder;
pub mod service;

pub use recorder::ActivityRecorder;
pub use service::ActivityService;

//! # Background Tasks
//!
//! Async fetches spawned onto the Tokio runtime. Each task claims its
//! resource's in-flight slot under a short state lock before spawning, so
//! repeated scheduling while a fetch is outstanding is a no-op. Results
//! come back over the event channel, never by locking state from the task.

pub mod feed;
pub mod session;

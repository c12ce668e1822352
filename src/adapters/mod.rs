//! Port implementations.
//!
//! `live` talks to the real host (system clock, disk, terminal); `memory`
//! keeps everything in process for tests and ephemeral sessions.

pub mod live;
pub mod memory;

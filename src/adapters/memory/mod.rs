//! In-process adapters for tests and ephemeral sessions.

mod clock;
mod id_gen;
mod kv;
mod notifier;
mod sink;

pub use clock::ManualClock;
pub use id_gen::SequentialIdGenerator;
pub use kv::MemoryKeyValueStore;
pub use notifier::RecordingNotifier;
pub use sink::CollectingSink;

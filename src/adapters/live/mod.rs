//! Live adapters for real external interactions.

pub mod clock;
pub mod id_gen;
pub mod kv;
pub mod notifier;
pub mod sink;

pub use clock::LiveClock;
pub use id_gen::LiveIdGenerator;
pub use kv::FileKeyValueStore;
pub use notifier::ConsoleNotifier;
pub use sink::{LogSink, PromptSink};

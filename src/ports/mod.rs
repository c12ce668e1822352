//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task core and the host
//! environment (time, IDs, key-value persistence, notifications, alert
//! delivery). Implementations live in `src/adapters/`.

pub mod alert_sink;
pub mod clock;
pub mod id_gen;
pub mod kv;
pub mod notifier;

pub use alert_sink::AlertSink;
pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use kv::KeyValueStore;
pub use notifier::{NotificationPermission, Notifier};

/// Error type returned by fallible port methods.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

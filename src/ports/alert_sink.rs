//! Alert sink port for delivering deadline alerts to the user.

use crate::alert::DeadlineAlert;

/// Receives deadline alerts raised by the alert engine.
///
/// `acknowledge` is called from inside the alert loop and must return
/// promptly; an interactive implementation waits for the user elsewhere.
pub trait AlertSink: Send + Sync {
    /// Delivers one alert.
    fn acknowledge(&self, alert: &DeadlineAlert);
}

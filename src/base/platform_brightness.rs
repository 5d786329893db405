use std::fmt;
use std::sync::Arc;

use crate::models::Brightness;

/// Callback fired by a platform whenever the OS brightness changes
pub type BrightnessCallback = Arc<dyn Fn() + Send + Sync>;

/// Handle returned when registering a [`BrightnessCallback`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host platform capability for reading and watching display brightness
pub trait PlatformBrightness: Send + Sync {
    /// Reads the brightness the OS reports right now.
    fn current_brightness(&self) -> Brightness;

    /// Registers a callback invoked after every OS brightness change.
    fn add_observer(&self, callback: BrightnessCallback) -> ObserverId;

    /// Unregisters a callback. Unknown ids are ignored.
    fn remove_observer(&self, id: ObserverId);
}

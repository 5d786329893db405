use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};
use log::debug;

use crate::base::{BrightnessCallback, ObserverId, PlatformBrightness};
use crate::models::Brightness;

/// A brightness source the host sets explicitly
///
/// Useful where the embedding toolkit already delivers theme-change events:
/// forward them to [`ManualBrightness::set`] and observers fire as if the OS
/// had notified them.
pub struct ManualBrightness {
    current: RwLock<Brightness>,
    observers: Mutex<HashMap<ObserverId, BrightnessCallback>>,
    next_id: AtomicU64,
}

impl ManualBrightness {
    pub fn new(initial: Brightness) -> Self {
        Self {
            current: RwLock::new(initial),
            observers: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Updates the reported brightness and notifies observers on a change
    pub fn set(&self, brightness: Brightness) {
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            if *current == brightness {
                return;
            }
            *current = brightness;
        }

        debug!("Platform brightness set to {}", brightness);

        // Snapshot so callbacks may add or remove observers
        let callbacks: Vec<BrightnessCallback> = self.observers().values().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers().len()
    }

    fn observers(&self) -> MutexGuard<'_, HashMap<ObserverId, BrightnessCallback>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ManualBrightness {
    fn default() -> Self {
        Self::new(Brightness::default())
    }
}

impl PlatformBrightness for ManualBrightness {
    fn current_brightness(&self) -> Brightness {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn add_observer(&self, callback: BrightnessCallback) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers().insert(id, callback);
        id
    }

    fn remove_observer(&self, id: ObserverId) {
        self.observers().remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_set_notifies_only_on_change() {
        let platform = ManualBrightness::new(Brightness::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        platform.add_observer(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        platform.set(Brightness::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        platform.set(Brightness::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(platform.current_brightness(), Brightness::Dark);
    }

    #[test]
    fn test_removed_observer_is_silent() {
        let platform = ManualBrightness::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let id = platform.add_observer(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        platform.remove_observer(id);
        platform.set(Brightness::Dark);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(platform.observer_count(), 0);
    }

    #[test]
    fn test_observers_survive_poisoned_lock() {
        let platform = ManualBrightness::new(Brightness::Light);
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = platform.observers.lock().unwrap();
            panic!("poison the observer map");
        }));
        assert!(platform.observers.is_poisoned());

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let id = platform.add_observer(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(platform.observer_count(), 1);

        platform.set(Brightness::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        platform.remove_observer(id);
        assert_eq!(platform.observer_count(), 0);
    }
}

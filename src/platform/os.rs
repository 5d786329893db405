use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;
use anyhow::{Context, Result};
use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::base::{BrightnessCallback, ObserverId, PlatformBrightness};
use crate::models::Brightness;

/// Function used to ask the platform for its current brightness
pub type BrightnessDetector = fn() -> Brightness;

/// Brightness reported by the operating system
///
/// Desktop platforms don't expose a portable change notification, so each
/// registered observer gets a polling task on the tokio runtime that fires
/// the callback when the detected value flips. While any watcher runs,
/// [`current_brightness`](PlatformBrightness::current_brightness) answers from
/// the last polled value instead of querying the OS again.
pub struct OsBrightness {
    detector: BrightnessDetector,
    poll_interval: Duration,
    runtime: Handle,
    latest: Arc<RwLock<Brightness>>,
    watchers: Mutex<HashMap<ObserverId, JoinHandle<()>>>,
    next_id: AtomicU64,
}

impl OsBrightness {
    /// Creates a source bound to the current tokio runtime
    pub fn new(poll_interval: Duration) -> Result<Self> {
        let runtime = Handle::try_current()
            .context("OS brightness polling requires a running tokio runtime")?;

        Ok(Self {
            detector: os_theme_detector,
            poll_interval,
            runtime,
            latest: Arc::new(RwLock::new(Brightness::default())),
            watchers: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        })
    }

    /// Overrides the detector used to determine the OS brightness.
    ///
    /// This is useful for testing or when a host wants to force a mode.
    pub fn with_detector(mut self, detector: BrightnessDetector) -> Self {
        self.detector = detector;
        self
    }

    fn watchers(&self) -> MutexGuard<'_, HashMap<ObserverId, JoinHandle<()>>> {
        self.watchers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn store_latest(latest: &RwLock<Brightness>, brightness: Brightness) {
    *latest.write().unwrap_or_else(PoisonError::into_inner) = brightness;
}

impl PlatformBrightness for OsBrightness {
    fn current_brightness(&self) -> Brightness {
        if self.watchers().is_empty() {
            return (self.detector)();
        }
        *self.latest.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn add_observer(&self, callback: BrightnessCallback) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let detector = self.detector;
        let mut last = detector();
        store_latest(&self.latest, last);

        let latest = self.latest.clone();
        let period = self.poll_interval.max(Duration::from_millis(1));

        let task = self.runtime.spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;

                // Detection may shell out or hit D-Bus
                let now = match tokio::task::spawn_blocking(detector).await {
                    Ok(brightness) => brightness,
                    Err(e) => {
                        warn!("Brightness detection failed: {}", e);
                        continue;
                    }
                };

                if now != last {
                    debug!("OS brightness changed from {} to {}", last, now);
                    last = now;
                    store_latest(&latest, now);
                    callback();
                }
            }
        });

        self.watchers().insert(id, task);
        id
    }

    fn remove_observer(&self, id: ObserverId) {
        if let Some(task) = self.watchers().remove(&id) {
            task.abort();
            debug!("Stopped brightness watcher {}", id);
        }
    }
}

impl Drop for OsBrightness {
    fn drop(&mut self) {
        for (_, task) in self.watchers().drain() {
            task.abort();
        }
    }
}

fn os_theme_detector() -> Brightness {
    match detect_os_theme() {
        OsThemeMode::Dark => Brightness::Dark,
        OsThemeMode::Light => Brightness::Light,
    }
}

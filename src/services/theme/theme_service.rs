use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::base::{ObserverId, PlatformBrightness, PreferenceStore};
use crate::config::ThemeOptions;
use crate::models::{Brightness, DesignSystem, ThemeMode};
use crate::ui::styles::{StyleBundle, StyleBundles};

/// Preference key the theme mode is stored under
pub const THEME_MODE_KEY: &str = "theme_mode";

struct ThemeState {
    mode: ThemeMode,
    system_brightness: Brightness,
    observing: bool,
    disposed: bool,
    /// Set once the user picks a mode, so a late restore can't override it
    mode_chosen: bool,
    observer: Option<ObserverId>,
    mode_tx: Option<watch::Sender<ThemeMode>>,
    brightness_tx: Option<watch::Sender<Brightness>>,
}

/// Tracks the user's theme mode and the OS brightness
///
/// One instance lives for the whole process, owned by the composition root
/// and shared as `Arc<ThemeService>`. Every public method is synchronous and
/// infallible; storage reads and writes run as tasks on the tokio runtime the
/// service was created in and only ever log their failures.
pub struct ThemeService {
    store: Arc<dyn PreferenceStore>,
    platform: Arc<dyn PlatformBrightness>,
    runtime: Handle,
    options: ThemeOptions,
    bundles: StyleBundles,
    state: Mutex<ThemeState>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl ThemeService {
    /// Creates the service on the current tokio runtime
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        platform: Arc<dyn PlatformBrightness>,
        options: ThemeOptions,
    ) -> Result<Arc<Self>> {
        let runtime = Handle::try_current()
            .context("ThemeService must be created inside a tokio runtime")?;

        let mode = ThemeMode::default();
        let system_brightness = Brightness::default();
        let (mode_tx, _) = watch::channel(mode);
        let (brightness_tx, _) = watch::channel(system_brightness);

        Ok(Arc::new(Self {
            store,
            platform,
            runtime,
            options,
            bundles: StyleBundles::build(),
            state: Mutex::new(ThemeState {
                mode,
                system_brightness,
                observing: false,
                disposed: false,
                mode_chosen: false,
                observer: None,
                mode_tx: Some(mode_tx),
                brightness_tx: Some(brightness_tx),
            }),
            pending: Mutex::new(Vec::new()),
        }))
    }

    /// Starts following the OS brightness and restores the saved mode
    ///
    /// The saved mode is read on a background task so startup never waits on
    /// storage. Calling this more than once, or after [`dispose`](Self::dispose),
    /// does nothing.
    pub fn start_observing(self: &Arc<Self>) {
        {
            let mut state = self.state();
            if state.disposed || state.observing {
                return;
            }
            state.observing = true;
        }

        let brightness = self.platform.current_brightness();
        self.publish_brightness(brightness);

        let weak = Arc::downgrade(self);
        let id = self.platform.add_observer(Arc::new(move || {
            if let Some(service) = weak.upgrade() {
                service.on_platform_brightness_changed();
            }
        }));

        {
            let mut state = self.state();
            if state.disposed {
                drop(state);
                self.platform.remove_observer(id);
                return;
            }
            state.observer = Some(id);
        }

        // The OS may have flipped between the first read and registration
        self.on_platform_brightness_changed();

        info!("Observing platform brightness (currently {})", self.system_brightness());
        self.schedule_restore();
    }

    /// Switches the theme mode and saves it in the background
    pub fn set_preference(&self, mode: ThemeMode) {
        {
            let mut state = self.state();
            if state.disposed || state.mode == mode {
                return;
            }
            state.mode = mode;
            state.mode_chosen = true;
            if let Some(tx) = &state.mode_tx {
                tx.send_replace(mode);
            }
        }

        info!("Theme mode set to {}", mode);

        let store = self.store.clone();
        let task = self.runtime.spawn(async move {
            match store.set_string(THEME_MODE_KEY, mode.as_str()).await {
                Ok(()) => debug!("Saved theme mode {}", mode),
                Err(e) => warn!("Failed to save theme mode '{}': {:#}", mode, e),
            }
        });
        self.track(task);
    }

    /// Called by the platform after the OS brightness changed
    pub fn on_platform_brightness_changed(&self) {
        if self.is_disposed() {
            return;
        }
        let brightness = self.platform.current_brightness();
        if self.publish_brightness(brightness) {
            info!("System brightness changed to {}", brightness);
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.state().mode
    }

    pub fn system_brightness(&self) -> Brightness {
        self.state().system_brightness
    }

    /// The brightness to render with right now
    pub fn effective_brightness(&self) -> Brightness {
        let state = self.state();
        state.mode.resolve(state.system_brightness)
    }

    pub fn style_bundle(&self, design_system: DesignSystem, brightness: Brightness) -> Arc<StyleBundle> {
        self.bundles.get(design_system, brightness).clone()
    }

    pub fn effective_style_bundle(&self, design_system: DesignSystem) -> Arc<StyleBundle> {
        self.style_bundle(design_system, self.effective_brightness())
    }

    /// Receiver that sees every theme mode transition
    ///
    /// After disposal the receiver is already closed and holds the last mode.
    pub fn subscribe_mode(&self) -> watch::Receiver<ThemeMode> {
        let state = self.state();
        match &state.mode_tx {
            Some(tx) => tx.subscribe(),
            None => closed_receiver(state.mode),
        }
    }

    /// Receiver that sees every system brightness transition
    pub fn subscribe_brightness(&self) -> watch::Receiver<Brightness> {
        let state = self.state();
        match &state.brightness_tx {
            Some(tx) => tx.subscribe(),
            None => closed_receiver(state.system_brightness),
        }
    }

    pub fn is_observing(&self) -> bool {
        let state = self.state();
        state.observing && !state.disposed
    }

    pub fn is_disposed(&self) -> bool {
        self.state().disposed
    }

    /// Waits for every outstanding storage read and write to finish
    pub async fn flush(&self) {
        loop {
            let tasks = std::mem::take(&mut *self.pending());
            if tasks.is_empty() {
                return;
            }
            for task in tasks {
                if let Err(e) = task.await {
                    warn!("Theme storage task did not complete: {}", e);
                }
            }
        }
    }

    /// Stops observing and closes both channels
    ///
    /// Storage writes already in flight are left to finish.
    pub fn dispose(&self) {
        let observer = {
            let mut state = self.state();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.mode_tx = None;
            state.brightness_tx = None;
            state.observer.take()
        };

        if let Some(id) = observer {
            self.platform.remove_observer(id);
        }
        info!("Theme service disposed");
    }

    fn schedule_restore(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        let store = self.store.clone();
        let delay = self.options.restore_delay;

        let task = self.runtime.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            // Let the frame that triggered startup finish first
            tokio::task::yield_now().await;

            let raw = match store.get_string(THEME_MODE_KEY).await {
                Ok(Some(raw)) => raw,
                Ok(None) => {
                    debug!("No saved theme mode, keeping default");
                    return;
                }
                Err(e) => {
                    warn!("Failed to read saved theme mode: {:#}", e);
                    return;
                }
            };

            match raw.parse::<ThemeMode>() {
                Ok(mode) => {
                    if let Some(service) = weak.upgrade() {
                        service.apply_restored(mode);
                    }
                }
                Err(e) => warn!("Ignoring saved theme mode: {:#}", e),
            }
        });
        self.track(task);
    }

    fn apply_restored(&self, mode: ThemeMode) {
        let mut state = self.state();
        if state.disposed || state.mode == mode {
            return;
        }
        if state.mode_chosen {
            debug!("Keeping chosen mode {} over saved {}", state.mode, mode);
            return;
        }
        state.mode = mode;
        if let Some(tx) = &state.mode_tx {
            tx.send_replace(mode);
        }
        info!("Restored theme mode {}", mode);
    }

    /// Compare-then-set; returns whether the value actually changed
    fn publish_brightness(&self, brightness: Brightness) -> bool {
        let mut state = self.state();
        if state.disposed || state.system_brightness == brightness {
            return false;
        }
        state.system_brightness = brightness;
        if let Some(tx) = &state.brightness_tx {
            tx.send_replace(brightness);
        }
        true
    }

    fn track(&self, task: JoinHandle<()>) {
        let mut pending = self.pending();
        pending.retain(|t| !t.is_finished());
        pending.push(task);
    }

    fn state(&self) -> MutexGuard<'_, ThemeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn pending(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ThemeService {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn closed_receiver<T>(value: T) -> watch::Receiver<T> {
    let (tx, rx) = watch::channel(value);
    drop(tx);
    rx
}

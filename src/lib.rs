pub mod base;
pub mod config;
pub mod data;
pub mod models;
pub mod platform;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export the seams hosts implement
pub use base::{BrightnessCallback, ObserverId, PlatformBrightness, PreferenceStore};

// Re-export models
pub use models::{Brightness, DesignSystem, ThemeMode};

pub use config::{AppConfig, ThemeOptions};
pub use data::{MemoryPreferenceStore, SqlitePreferenceStore};
pub use platform::{ManualBrightness, OsBrightness};
pub use services::{ThemeService, THEME_MODE_KEY};
pub use ui::styles::{StyleBundle, Palette};
pub use ui::AppContext;

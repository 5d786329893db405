mod theme_service;

pub use theme_service::{ThemeService, THEME_MODE_KEY};

pub mod brightness;
pub mod design_system;
pub mod theme_mode;

pub use brightness::Brightness;
pub use design_system::DesignSystem;
pub use theme_mode::ThemeMode;

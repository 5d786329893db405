// Seams the theme service depends on without implementing them
pub mod platform_brightness;
pub mod preference_store;

pub use platform_brightness::*;
pub use preference_store::*;

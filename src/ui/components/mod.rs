pub mod brightness_panel;
pub mod mode_selector;
pub mod style_preview;

pub use brightness_panel::BrightnessPanel;
pub use mode_selector::ModeSelector;
pub use style_preview::StylePreview;

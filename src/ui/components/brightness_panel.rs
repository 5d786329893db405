use std::sync::Arc;
use egui::{Grid, RichText, Ui};
use tokio::sync::watch;

use crate::models::{Brightness, ThemeMode};
use crate::services::ThemeService;
use crate::ui::styles::Palette;

/// Read-only summary of mode, system and effective brightness
pub struct BrightnessPanel {
    service: Arc<ThemeService>,
    modes: watch::Receiver<ThemeMode>,
    brightness: watch::Receiver<Brightness>,
}

impl BrightnessPanel {
    pub fn new(service: Arc<ThemeService>) -> Self {
        Self {
            modes: service.subscribe_mode(),
            brightness: service.subscribe_brightness(),
            service,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, colors: &Palette) {
        let mode = *self.modes.borrow_and_update();
        let system = *self.brightness.borrow_and_update();
        let effective = self.service.effective_brightness();

        Grid::new("brightness_panel").num_columns(2).show(ui, |ui| {
            ui.label(RichText::new("Mode").color(colors.text_dimmed));
            ui.label(RichText::new(mode.label()).color(colors.text));
            ui.end_row();

            ui.label(RichText::new("System").color(colors.text_dimmed));
            ui.label(RichText::new(system.to_string()).color(colors.text));
            ui.end_row();

            ui.label(RichText::new("Effective").color(colors.text_dimmed));
            ui.label(RichText::new(effective.to_string()).color(colors.accent).strong());
            ui.end_row();
        });
    }
}

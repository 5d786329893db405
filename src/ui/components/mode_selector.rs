use std::sync::Arc;
use egui::{RichText, Ui};
use tokio::sync::watch;

use crate::models::ThemeMode;
use crate::services::ThemeService;
use crate::ui::styles::{Palette, DEFAULT_SPACING};

/// Segmented picker for the theme mode
pub struct ModeSelector {
    service: Arc<ThemeService>,
    modes: watch::Receiver<ThemeMode>,
    current: ThemeMode,
}

impl ModeSelector {
    pub fn new(service: Arc<ThemeService>) -> Self {
        let modes = service.subscribe_mode();
        let current = *modes.borrow();
        Self {
            service,
            modes,
            current,
        }
    }

    /// Renders the picker, forwarding a new choice to the service
    pub fn ui(&mut self, ui: &mut Ui, colors: &Palette) {
        if self.modes.has_changed().unwrap_or(false) {
            self.current = *self.modes.borrow_and_update();
        }

        let mut selected = self.current;
        ui.label(RichText::new("Theme").color(colors.text_dimmed));
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = DEFAULT_SPACING;
            for mode in ThemeMode::ALL {
                ui.selectable_value(&mut selected, mode, mode.label());
            }
        });

        if selected != self.current {
            self.current = selected;
            self.service.set_preference(selected);
        }
    }
}

use std::sync::Arc;
use egui::{vec2, Color32, RichText, Sense, Ui};

use crate::models::DesignSystem;
use crate::services::ThemeService;
use crate::ui::styles::{Palette, DEFAULT_ROUNDING};

const SWATCH_SIZE: f32 = 36.0;

/// Color swatches for one design system's active bundle
pub struct StylePreview {
    service: Arc<ThemeService>,
    design_system: DesignSystem,
}

impl StylePreview {
    pub fn new(service: Arc<ThemeService>, design_system: DesignSystem) -> Self {
        Self {
            service,
            design_system,
        }
    }

    pub fn ui(&self, ui: &mut Ui, colors: &Palette) {
        let bundle = self.service.effective_style_bundle(self.design_system);

        ui.label(
            RichText::new(format!("{} ({})", self.design_system, bundle.brightness))
                .color(colors.text)
                .strong(),
        );

        let swatches = [
            ("background", bundle.palette.background),
            ("surface", bundle.palette.surface),
            ("text", bundle.palette.text),
            ("accent", bundle.palette.accent),
            ("error", bundle.palette.error),
            ("success", bundle.palette.success),
        ];

        ui.horizontal_wrapped(|ui| {
            for (name, color) in swatches {
                swatch(ui, name, color, bundle.palette.separator);
            }
        });
    }
}

fn swatch(ui: &mut Ui, name: &str, color: Color32, outline: Color32) {
    ui.vertical(|ui| {
        let (rect, response) = ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::hover());
        ui.painter().rect_filled(rect, DEFAULT_ROUNDING, color);
        ui.painter()
            .rect_stroke(rect, DEFAULT_ROUNDING, egui::Stroke::new(1.0, outline));
        response.on_hover_text(format!("{} #{:02x}{:02x}{:02x}", name, color.r(), color.g(), color.b()));
        ui.small(name);
    });
}

use std::sync::Arc;
use egui::{CentralPanel, RichText, TopBottomPanel};
use log::debug;
use tokio::task::JoinHandle;

use crate::models::DesignSystem;
use crate::services::ThemeService;
use crate::ui::components::{BrightnessPanel, ModeSelector, StylePreview};
use crate::ui::styles::{StyleBundle, DEFAULT_PADDING};

/// Demo screen showing the theme state and both design systems
pub struct DemoView {
    service: Arc<ThemeService>,
    design_system: DesignSystem,
    applied: Option<Arc<StyleBundle>>,
    mode_selector: ModeSelector,
    brightness_panel: BrightnessPanel,
    previews: Vec<StylePreview>,
}

impl DemoView {
    pub fn new(service: Arc<ThemeService>) -> Self {
        Self {
            mode_selector: ModeSelector::new(service.clone()),
            brightness_panel: BrightnessPanel::new(service.clone()),
            previews: DesignSystem::ALL
                .iter()
                .map(|design| StylePreview::new(service.clone(), *design))
                .collect(),
            design_system: DesignSystem::Material,
            applied: None,
            service,
        }
    }

    /// Renders the whole screen
    pub fn ui(&mut self, ctx: &egui::Context) {
        let bundle = self.service.effective_style_bundle(self.design_system);
        let needs_apply = self
            .applied
            .as_ref()
            .map_or(true, |applied| !Arc::ptr_eq(applied, &bundle));
        if needs_apply {
            debug!("Applying {} {} style", bundle.design_system, bundle.brightness);
            bundle.apply(ctx);
            self.applied = Some(bundle.clone());
        }
        let colors = bundle.palette;

        TopBottomPanel::top("design_system").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Design system").color(colors.text_dimmed));
                for design in DesignSystem::ALL {
                    ui.selectable_value(&mut self.design_system, design, design.to_string());
                }
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new("Theme").color(colors.text));
            ui.add_space(DEFAULT_PADDING);

            self.mode_selector.ui(ui, &colors);
            ui.add_space(DEFAULT_PADDING);

            self.brightness_panel.ui(ui, &colors);
            ui.separator();

            for preview in &self.previews {
                preview.ui(ui, &colors);
                ui.add_space(DEFAULT_PADDING);
            }
        });
    }
}

/// Requests a repaint whenever either theme channel changes
///
/// Ends on its own once the service is disposed and the channels close.
pub fn spawn_repaint_bridge(service: &ThemeService, ctx: egui::Context) -> JoinHandle<()> {
    let mut modes = service.subscribe_mode();
    let mut brightness = service.subscribe_brightness();

    tokio::spawn(async move {
        loop {
            let changed = tokio::select! {
                result = modes.changed() => result,
                result = brightness.changed() => result,
            };
            if changed.is_err() {
                debug!("Theme channels closed, stopping repaint bridge");
                return;
            }
            ctx.request_repaint();
        }
    })
}

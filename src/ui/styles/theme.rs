use std::sync::Arc;
use egui::{Color32, Margin, Rounding, Stroke, Style, Visuals};

use crate::models::{Brightness, DesignSystem};

/// Default padding for UI elements
pub const DEFAULT_PADDING: f32 = 8.0;
/// Default spacing between UI elements
pub const DEFAULT_SPACING: f32 = 4.0;
/// Default rounding radius for UI elements
pub const DEFAULT_ROUNDING: f32 = 4.0;

/// Color scheme for one design system at one brightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub text_dimmed: Color32,
    pub accent: Color32,
    pub on_accent: Color32,
    pub error: Color32,
    pub success: Color32,
    pub separator: Color32,
}

impl Palette {
    pub fn material(brightness: Brightness) -> Self {
        match brightness {
            Brightness::Light => Self {
                background: Color32::from_rgb(255, 251, 254),
                surface: Color32::from_rgb(243, 237, 247),
                text: Color32::from_rgb(28, 27, 31),
                text_dimmed: Color32::from_rgb(73, 69, 79),
                accent: Color32::from_rgb(103, 80, 164),
                on_accent: Color32::WHITE,
                error: Color32::from_rgb(179, 38, 30),
                success: Color32::from_rgb(56, 142, 60),
                separator: Color32::from_rgb(202, 196, 208),
            },
            Brightness::Dark => Self {
                background: Color32::from_rgb(28, 27, 31),
                surface: Color32::from_rgb(43, 41, 48),
                text: Color32::from_rgb(230, 225, 229),
                text_dimmed: Color32::from_rgb(202, 196, 208),
                accent: Color32::from_rgb(208, 188, 255),
                on_accent: Color32::from_rgb(56, 30, 114),
                error: Color32::from_rgb(242, 184, 181),
                success: Color32::from_rgb(129, 199, 132),
                separator: Color32::from_rgb(73, 69, 79),
            },
        }
    }

    pub fn cupertino(brightness: Brightness) -> Self {
        match brightness {
            Brightness::Light => Self {
                background: Color32::from_rgb(242, 242, 247),
                surface: Color32::WHITE,
                text: Color32::BLACK,
                text_dimmed: Color32::from_rgb(138, 138, 142),
                accent: Color32::from_rgb(0, 122, 255),
                on_accent: Color32::WHITE,
                error: Color32::from_rgb(255, 59, 48),
                success: Color32::from_rgb(52, 199, 89),
                separator: Color32::from_rgb(198, 198, 200),
            },
            Brightness::Dark => Self {
                background: Color32::BLACK,
                surface: Color32::from_rgb(28, 28, 30),
                text: Color32::WHITE,
                text_dimmed: Color32::from_rgb(142, 142, 147),
                accent: Color32::from_rgb(10, 132, 255),
                on_accent: Color32::WHITE,
                error: Color32::from_rgb(255, 69, 58),
                success: Color32::from_rgb(48, 209, 88),
                separator: Color32::from_rgb(56, 56, 58),
            },
        }
    }
}

/// Precomputed style for one design system at one brightness
#[derive(Debug, Clone)]
pub struct StyleBundle {
    pub design_system: DesignSystem,
    pub brightness: Brightness,
    pub palette: Palette,
    pub style: Style,
}

impl StyleBundle {
    pub fn build(design_system: DesignSystem, brightness: Brightness) -> Self {
        let style = match design_system {
            DesignSystem::Material => create_material_style(brightness),
            DesignSystem::Cupertino => create_cupertino_style(brightness),
        };
        let palette = match design_system {
            DesignSystem::Material => Palette::material(brightness),
            DesignSystem::Cupertino => Palette::cupertino(brightness),
        };

        Self {
            design_system,
            brightness,
            palette,
            style,
        }
    }

    /// Installs this bundle's style on an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style.clone());
    }
}

/// The four bundles, built once and shared
#[derive(Debug, Clone)]
pub struct StyleBundles {
    material_light: Arc<StyleBundle>,
    material_dark: Arc<StyleBundle>,
    cupertino_light: Arc<StyleBundle>,
    cupertino_dark: Arc<StyleBundle>,
}

impl StyleBundles {
    pub fn build() -> Self {
        Self {
            material_light: Arc::new(StyleBundle::build(DesignSystem::Material, Brightness::Light)),
            material_dark: Arc::new(StyleBundle::build(DesignSystem::Material, Brightness::Dark)),
            cupertino_light: Arc::new(StyleBundle::build(DesignSystem::Cupertino, Brightness::Light)),
            cupertino_dark: Arc::new(StyleBundle::build(DesignSystem::Cupertino, Brightness::Dark)),
        }
    }

    pub fn get(&self, design_system: DesignSystem, brightness: Brightness) -> &Arc<StyleBundle> {
        match (design_system, brightness) {
            (DesignSystem::Material, Brightness::Light) => &self.material_light,
            (DesignSystem::Material, Brightness::Dark) => &self.material_dark,
            (DesignSystem::Cupertino, Brightness::Light) => &self.cupertino_light,
            (DesignSystem::Cupertino, Brightness::Dark) => &self.cupertino_dark,
        }
    }
}

/// Creates the Material style: tight corners, tonal surfaces
pub fn create_material_style(brightness: Brightness) -> Style {
    build_style(&Palette::material(brightness), brightness, DEFAULT_ROUNDING, DEFAULT_PADDING)
}

/// Creates the Cupertino style: rounder corners, roomier padding
pub fn create_cupertino_style(brightness: Brightness) -> Style {
    build_style(
        &Palette::cupertino(brightness),
        brightness,
        DEFAULT_ROUNDING * 2.5,
        DEFAULT_PADDING * 1.5,
    )
}

fn build_style(colors: &Palette, brightness: Brightness, rounding: f32, padding: f32) -> Style {
    let mut style = Style::default();
    style.spacing.item_spacing = egui::vec2(DEFAULT_SPACING, DEFAULT_SPACING);
    style.spacing.window_margin = Margin::same(padding);
    style.spacing.button_padding = egui::vec2(padding, padding * 0.5);

    let mut visuals = if brightness.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.window_rounding = Rounding::same(rounding);
    visuals.window_fill = colors.surface;
    visuals.panel_fill = colors.background;
    visuals.extreme_bg_color = colors.surface;
    visuals.hyperlink_color = colors.accent;
    visuals.error_fg_color = colors.error;

    visuals.widgets.noninteractive.bg_fill = colors.background;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.separator);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

    visuals.widgets.inactive.bg_fill = colors.surface;
    visuals.widgets.inactive.weak_bg_fill = colors.surface;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text);
    visuals.widgets.inactive.rounding = Rounding::same(rounding);

    visuals.widgets.hovered.bg_fill = colors.accent;
    visuals.widgets.hovered.weak_bg_fill = colors.accent;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, colors.on_accent);
    visuals.widgets.hovered.rounding = Rounding::same(rounding);

    visuals.widgets.active.bg_fill = colors.accent;
    visuals.widgets.active.weak_bg_fill = colors.accent;
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, colors.on_accent);
    visuals.widgets.active.rounding = Rounding::same(rounding);

    visuals.selection.bg_fill = colors.accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, colors.accent);

    style.visuals = visuals;
    style
}

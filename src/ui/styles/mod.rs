mod theme;

pub use theme::{
    create_cupertino_style,
    create_material_style,
    Palette,
    StyleBundle,
    StyleBundles,
    DEFAULT_PADDING,
    DEFAULT_ROUNDING,
    DEFAULT_SPACING,
};

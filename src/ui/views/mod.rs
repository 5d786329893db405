pub mod demo_view;

pub use demo_view::{spawn_repaint_bridge, DemoView};

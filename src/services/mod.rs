pub mod theme;

pub use theme::*;

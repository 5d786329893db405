//! Platform brightness sources.
//!
//! - [`OsBrightness`]: asks the operating system through `dark-light`
//! - [`ManualBrightness`]: driven by the host, for embedding and tests

mod manual;
mod os;

pub use manual::ManualBrightness;
pub use os::{BrightnessDetector, OsBrightness};

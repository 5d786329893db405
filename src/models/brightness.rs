use std::fmt;
use serde::{Deserialize, Serialize};

/// Light or dark display brightness
///
/// Used both for the value reported by the operating system and for the
/// brightness actually applied after resolving a [`ThemeMode`](super::ThemeMode).
///
/// The default is `Light`. It stands in for the system value until the
/// theme service starts observing the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    #[default]
    Light,
    Dark,
}

impl Brightness {
    pub fn is_dark(self) -> bool {
        self == Brightness::Dark
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brightness::Light => write!(f, "light"),
            Brightness::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_guess_is_light() {
        assert_eq!(Brightness::default(), Brightness::Light);
        assert!(!Brightness::default().is_dark());
    }

    #[test]
    fn test_display() {
        assert_eq!(Brightness::Dark.to_string(), "dark");
        assert_eq!(Brightness::Light.to_string(), "light");
    }
}

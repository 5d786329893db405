use std::fmt;
use std::str::FromStr;
use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

use crate::models::brightness::Brightness;

/// The user's theme choice
///
/// `System` follows whatever the host operating system reports; the
/// other two pin the brightness regardless of the OS setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All modes, in the order a picker should show them
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Resolves this mode against the current system brightness
    pub fn resolve(self, system: Brightness) -> Brightness {
        match self {
            ThemeMode::Light => Brightness::Light,
            ThemeMode::Dark => Brightness::Dark,
            ThemeMode::System => system,
        }
    }

    /// Text stored in the preference table
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Human readable label for pickers
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(anyhow!("Unknown theme mode: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn test_resolve_explicit_modes_ignore_system() {
        for system in [Brightness::Light, Brightness::Dark] {
            assert_eq!(ThemeMode::Light.resolve(system), Brightness::Light);
            assert_eq!(ThemeMode::Dark.resolve(system), Brightness::Dark);
        }
    }

    #[test]
    fn test_resolve_system_follows_os() {
        assert_eq!(ThemeMode::System.resolve(Brightness::Light), Brightness::Light);
        assert_eq!(ThemeMode::System.resolve(Brightness::Dark), Brightness::Dark);
    }

    #[test]
    fn test_stored_text_parses_back() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.to_string().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(" Dark\n".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("SYSTEM".parse::<ThemeMode>().unwrap(), ThemeMode::System);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "sepia".parse::<ThemeMode>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_serde_uses_stored_text() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}

use std::fmt;
use serde::{Deserialize, Serialize};

/// Visual design language a style bundle is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignSystem {
    /// Flat surfaces, saturated accent, rounded-rect controls
    Material,
    /// Translucent grays, system blue accent, generous rounding
    Cupertino,
}

impl DesignSystem {
    pub const ALL: [DesignSystem; 2] = [DesignSystem::Material, DesignSystem::Cupertino];
}

impl fmt::Display for DesignSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignSystem::Material => write!(f, "material"),
            DesignSystem::Cupertino => write!(f, "cupertino"),
        }
    }
}

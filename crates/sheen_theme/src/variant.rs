//! Theme variants

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Overall palette a style instance is created with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeVariant {
    #[default]
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "hc")]
    HighContrast,
    #[serde(rename = "hc-dark")]
    HighContrastInverse,
}

impl ThemeVariant {
    pub const COUNT: usize = 4;

    pub const ALL: [ThemeVariant; Self::COUNT] = [
        ThemeVariant::Light,
        ThemeVariant::Dark,
        ThemeVariant::HighContrast,
        ThemeVariant::HighContrastInverse,
    ];

    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "hc",
            Self::HighContrastInverse => "hc-dark",
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::HighContrastInverse => "High Contrast Inverse",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::HighContrastInverse)
    }

    pub fn is_high_contrast(self) -> bool {
        matches!(self, Self::HighContrast | Self::HighContrastInverse)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for ThemeVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ThemeVariant::ALL
            .into_iter()
            .find(|variant| variant.id().eq_ignore_ascii_case(s))
            .or(match s.to_ascii_lowercase().as_str() {
                "high-contrast" => Some(Self::HighContrast),
                "high-contrast-inverse" => Some(Self::HighContrastInverse),
                _ => None,
            })
            .ok_or_else(|| format!("unknown theme variant `{s}`"))
    }
}

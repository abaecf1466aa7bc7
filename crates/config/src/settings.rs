// Visual settings
// Resolved from the host's persisted "settings" object on every update cycle

use serde::{Deserialize, Serialize};

use gridview_engine::ValueFormat;

/// Color scheme of the rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Unknown or empty keys resolve to `Light`
    pub fn from_key(key: &str) -> Self {
        Self::parse_key(key).unwrap_or_default()
    }

    pub fn parse_key(key: &str) -> Option<Self> {
        match key {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Key persisted to the host, also used as the root style class
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Effective settings for one update cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub value_format: ValueFormat,
}

impl Settings {
    /// Resolve from the raw persisted strings. Absent, empty and unknown
    /// values all fall back to the defaults.
    pub fn resolve(theme: Option<&str>, value_format: Option<&str>) -> Self {
        let theme = match theme {
            Some(key) if !key.is_empty() => Theme::parse_key(key).unwrap_or_else(|| {
                log::debug!("unknown theme {:?}, using {}", key, Theme::default());
                Theme::default()
            }),
            _ => Theme::default(),
        };
        let value_format = match value_format {
            Some(key) if !key.is_empty() => ValueFormat::parse_key(key).unwrap_or_else(|| {
                log::debug!("unknown value format {:?}, using {}", key, ValueFormat::default());
                ValueFormat::default()
            }),
            _ => ValueFormat::default(),
        };
        Self { theme, value_format }
    }
}

// Display configuration: static labels and the date pattern.
// Loaded from TOML; every key is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use gridview_engine::cell::{DateStyle, DEFAULT_DATE_PATTERN};

use crate::error::ConfigError;
use crate::settings::Theme;
use crate::theme::ThemeColors;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Heading shown above the controls
    pub title: String,
    /// Header of the row-label column
    pub category_label: String,
    pub theme_toggle_label: String,
    /// strftime pattern for date cells
    pub date_format: String,
    /// "#rrggbb" accent override applied to both palettes
    pub accent: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Data Table".into(),
            category_label: "Category".into(),
            theme_toggle_label: "Change Theme".into(),
            date_format: DEFAULT_DATE_PATTERN.into(),
            accent: None,
        }
    }
}

impl DisplayConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if DateStyle::new(&self.date_format).is_none() {
            return Err(ConfigError::Invalid {
                field: "date_format",
                value: self.date_format.clone(),
            });
        }
        if let Some(accent) = &self.accent {
            if ThemeColors::hex_to_color(accent).is_none() {
                return Err(ConfigError::Invalid { field: "accent", value: accent.clone() });
            }
        }
        Ok(())
    }

    /// Date style for cell rendering. Falls back to the default pattern if
    /// the config was built by hand with a bad pattern.
    pub fn date_style(&self) -> DateStyle {
        DateStyle::new(&self.date_format).unwrap_or_default()
    }

    pub fn palette(&self, theme: Theme) -> ThemeColors {
        let colors = ThemeColors::for_theme(theme);
        match self.accent.as_deref().and_then(ThemeColors::hex_to_color) {
            Some(accent) => colors.with_accent(accent),
            None => colors,
        }
    }
}

// Configuration: visual settings, display labels, theme palettes

pub mod display;
pub mod error;
pub mod settings;
pub mod theme;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use settings::{Settings, Theme};
pub use theme::ThemeColors;

/// Framework-agnostic RGBA color
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert from hex u32 (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self { r, g, b, a: 1.0 }
    }
}

// Theme palettes for the rendered table

use serde::Serialize;

use crate::settings::Theme;
use crate::Color;

/// Colors handed to the rendering surface alongside the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeColors {
    pub background: Color,
    pub header_background: Color,
    pub cell_background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub gridline: Color,
    pub accent: Color,
    pub selected: Color,
    pub selected_border: Color,
}

impl ThemeColors {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        ThemeColors {
            background: Color::from_rgb(0.008, 0.024, 0.090),        // #020617
            header_background: Color::from_rgb(0.118, 0.161, 0.231), // #1e293b
            cell_background: Color::from_rgb(0.059, 0.090, 0.165),   // #0f172a
            text: Color::from_rgb(0.945, 0.961, 0.976),              // #f1f5f9
            text_dim: Color::from_rgb(0.392, 0.439, 0.529),          // #64748b
            gridline: Color::from_rgb(0.200, 0.255, 0.333),          // #334155
            accent: Color::from_rgb(0.231, 0.510, 0.965),            // #3b82f6
            selected: Color::from_rgba(0.231, 0.510, 0.965, 0.2),
            selected_border: Color::from_rgb(0.231, 0.510, 0.965),
        }
    }

    pub fn light() -> Self {
        ThemeColors {
            background: Color::from_rgb(0.973, 0.980, 0.988),        // #f8fafc
            header_background: Color::from_rgb(0.886, 0.910, 0.941), // #e2e8f0
            cell_background: Color::from_rgb(0.945, 0.961, 0.976),   // #f1f5f9
            text: Color::from_rgb(0.059, 0.090, 0.165),              // #0f172a
            text_dim: Color::from_rgb(0.278, 0.333, 0.412),          // #475569
            gridline: Color::from_rgb(0.796, 0.835, 0.882),          // #cbd5e1
            accent: Color::from_rgb(0.231, 0.510, 0.965),            // #3b82f6
            selected: Color::from_rgba(0.231, 0.510, 0.965, 0.15),
            selected_border: Color::from_rgb(0.231, 0.510, 0.965),
        }
    }

    /// Replace the accent and the selection colors derived from it
    pub fn with_accent(mut self, accent: Color) -> Self {
        let alpha = self.selected.a;
        self.accent = accent;
        self.selected = Color::from_rgba(accent.r, accent.g, accent.b, alpha);
        self.selected_border = accent;
        self
    }

    /// Parse "#rrggbb" (leading '#' optional)
    pub fn hex_to_color(hex: &str) -> Option<Color> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
        Some(Color::from_rgb(r, g, b))
    }
}

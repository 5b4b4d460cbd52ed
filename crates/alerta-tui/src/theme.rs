//! Color themes for the Alerta TUI.
//!
//! Each map base layer carries its own palette, so switching the layer
//! restyles the whole screen the way a tile swap restyles a web map.

use alerta_config::MapLayer;
use ratatui::style::Color;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    /// Headers and focused borders
    pub header: Color,
    /// Hotkey hints
    pub hotkey: Color,
    /// Normal text
    pub text: Color,
    /// Secondary text (timestamps, coordinates)
    pub text_dim: Color,
    /// Unfocused borders
    pub border_dim: Color,
    /// Map background
    pub map_bg: Color,
    /// Map grid dots
    pub map_grid: Color,
    /// Alert markers
    pub marker: Color,
    /// Map cursor
    pub cursor: Color,
    /// Home location marker
    pub home: Color,
    /// Highlighted list entry background
    pub selected_bg: Color,
}

/// A named theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub layer: MapLayer,
    pub colors: ThemeColors,
}

impl Theme {
    /// Palette for the light base layer.
    pub fn light() -> Self {
        Self {
            layer: MapLayer::Light,
            colors: ThemeColors {
                header: Color::Blue,
                hotkey: Color::LightBlue,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border_dim: Color::Gray,
                map_bg: Color::White,
                map_grid: Color::Gray,
                marker: Color::Red,
                cursor: Color::Blue,
                home: Color::LightBlue,
                selected_bg: Color::LightRed,
            },
        }
    }

    /// Palette for the dark base layer.
    pub fn dark() -> Self {
        Self {
            layer: MapLayer::Dark,
            colors: ThemeColors {
                header: Color::Cyan,
                hotkey: Color::Yellow,
                text: Color::White,
                text_dim: Color::Gray,
                border_dim: Color::DarkGray,
                map_bg: Color::Black,
                map_grid: Color::DarkGray,
                marker: Color::LightRed,
                cursor: Color::Cyan,
                home: Color::LightBlue,
                selected_bg: Color::Red,
            },
        }
    }

    /// Palette for the satellite base layer.
    pub fn satellite() -> Self {
        Self {
            layer: MapLayer::Satellite,
            colors: ThemeColors {
                header: Color::LightGreen,
                hotkey: Color::Yellow,
                text: Color::White,
                text_dim: Color::Gray,
                border_dim: Color::Green,
                map_bg: Color::Rgb(24, 48, 24),
                map_grid: Color::Rgb(60, 90, 50),
                marker: Color::LightRed,
                cursor: Color::Yellow,
                home: Color::LightCyan,
                selected_bg: Color::Red,
            },
        }
    }

    /// Theme for a base layer.
    pub fn for_layer(layer: MapLayer) -> Self {
        match layer {
            MapLayer::Light => Self::light(),
            MapLayer::Dark => Self::dark(),
            MapLayer::Satellite => Self::satellite(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_matches_layer() {
        for layer in MapLayer::ALL {
            assert_eq!(Theme::for_layer(layer).layer, layer);
        }
    }

    #[test]
    fn test_layers_have_distinct_backgrounds() {
        let light = Theme::light().colors.map_bg;
        let dark = Theme::dark().colors.map_bg;
        let satellite = Theme::satellite().colors.map_bg;
        assert_ne!(light, dark);
        assert_ne!(dark, satellite);
        assert_ne!(light, satellite);
    }
}

//! Color theme system
//!
//! Provides built-in presets (classic, dark, light) and per-color overrides
//! from the config file.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete theme definition with all UI colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Chrome
    pub address_bar_bg: Color,
    pub address_bar_fg: Color,
    pub window_bg: Color,
    pub viewport_bg: Color,

    // Icons
    pub icon_directory: Color,
    pub icon_directory_tab: Color,
    pub icon_text_page: Color,
    pub icon_text_lines: Color,
    pub icon_generic_page: Color,
    pub icon_generic_fold: Color,
    pub label_fg: Color,

    // Error dialog
    pub dialog_bg: Color,
    pub dialog_border: Color,
    pub dialog_title: Color,
    pub dialog_text: Color,
    pub dialog_button_focused_bg: Color,
    pub dialog_button_focused_fg: Color,
    pub dialog_help: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        let charcoal = Color::Rgb(58, 58, 58);
        let light_gray = Color::Rgb(220, 220, 220);
        let gold = Color::Rgb(200, 170, 100);

        Self {
            address_bar_bg: Color::Rgb(95, 135, 135),
            address_bar_fg: light_gray,
            window_bg: Color::Rgb(30, 30, 30),
            viewport_bg: charcoal,

            icon_directory: gold,
            icon_directory_tab: Color::Rgb(160, 130, 70),
            icon_text_page: light_gray,
            icon_text_lines: Color::Rgb(76, 82, 99),
            icon_generic_page: Color::Rgb(171, 178, 191),
            icon_generic_fold: Color::Rgb(120, 120, 120),
            label_fg: light_gray,

            dialog_bg: Color::Rgb(90, 40, 40),
            dialog_border: Color::Rgb(200, 100, 100),
            dialog_title: gold,
            dialog_text: light_gray,
            dialog_button_focused_bg: Color::Rgb(0, 150, 136),
            dialog_button_focused_fg: Color::Black,
            dialog_help: Color::Rgb(160, 160, 160),
        }
    }

    /// Classic theme: light address bar over a gray canvas
    pub fn classic() -> Self {
        Self {
            address_bar_bg: Color::Rgb(0xEE, 0xEE, 0xEE),
            address_bar_fg: Color::Rgb(21, 21, 21),
            window_bg: Color::Black,
            viewport_bg: Color::Rgb(0x42, 0x42, 0x42),

            icon_directory: Color::Rgb(240, 200, 90),
            icon_directory_tab: Color::Rgb(210, 165, 60),
            icon_text_page: Color::White,
            icon_text_lines: Color::Rgb(90, 90, 90),
            icon_generic_page: Color::Rgb(230, 230, 230),
            icon_generic_fold: Color::Rgb(170, 170, 170),
            label_fg: Color::Rgb(0xF5, 0xF5, 0xF5),

            dialog_bg: Color::Rgb(0xEE, 0xEE, 0xEE),
            dialog_border: Color::Rgb(21, 21, 21),
            dialog_title: Color::Rgb(21, 21, 21),
            dialog_text: Color::Rgb(21, 21, 21),
            dialog_button_focused_bg: Color::Blue,
            dialog_button_focused_fg: Color::White,
            dialog_help: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        let ink = Color::Rgb(40, 40, 40);

        Self {
            address_bar_bg: Color::Rgb(200, 215, 230),
            address_bar_fg: ink,
            window_bg: Color::Rgb(235, 235, 235),
            viewport_bg: Color::Rgb(250, 250, 250),

            icon_directory: Color::Rgb(230, 180, 60),
            icon_directory_tab: Color::Rgb(200, 150, 40),
            icon_text_page: Color::Rgb(255, 255, 255),
            icon_text_lines: Color::Rgb(150, 150, 150),
            icon_generic_page: Color::Rgb(215, 220, 225),
            icon_generic_fold: Color::Rgb(170, 175, 180),
            label_fg: ink,

            dialog_bg: Color::Rgb(255, 235, 235),
            dialog_border: Color::Rgb(180, 60, 60),
            dialog_title: Color::Rgb(140, 30, 30),
            dialog_text: ink,
            dialog_button_focused_bg: Color::Rgb(0, 120, 110),
            dialog_button_focused_fg: Color::White,
            dialog_help: Color::Rgb(110, 110, 110),
        }
    }

    /// Get a built-in theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "classic" => Some(Self::classic()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Apply color overrides from a config map
    pub fn with_overrides(mut self, colors: &HashMap<String, String>) -> Self {
        for (key, value) in colors {
            let Some(color) = parse_color(value) else {
                log::warn!("theme: ignoring unparsable color {} = {:?}", key, value);
                continue;
            };
            match key.as_str() {
                "address_bar_bg" => self.address_bar_bg = color,
                "address_bar_fg" => self.address_bar_fg = color,
                "window_bg" => self.window_bg = color,
                "viewport_bg" => self.viewport_bg = color,
                "icon_directory" => self.icon_directory = color,
                "icon_directory_tab" => self.icon_directory_tab = color,
                "icon_text_page" => self.icon_text_page = color,
                "icon_text_lines" => self.icon_text_lines = color,
                "icon_generic_page" => self.icon_generic_page = color,
                "icon_generic_fold" => self.icon_generic_fold = color,
                "label_fg" => self.label_fg = color,
                "dialog_bg" => self.dialog_bg = color,
                "dialog_border" => self.dialog_border = color,
                "dialog_title" => self.dialog_title = color,
                "dialog_text" => self.dialog_text = color,
                "dialog_button_focused_bg" => self.dialog_button_focused_bg = color,
                "dialog_button_focused_fg" => self.dialog_button_focused_fg = color,
                "dialog_help" => self.dialog_help = color,
                _ => log::warn!("theme: unknown color key {}", key),
            }
        }
        self
    }
}

/// Theme configuration for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Active theme name: "dark", "classic" or "light"
    pub preset: String,
    /// Custom color overrides for the active theme
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: "dark".to_string(),
            colors: HashMap::new(),
        }
    }
}

impl ThemeConfig {
    /// Build a Theme from this config
    pub fn build_theme(&self) -> Theme {
        let base = Theme::by_name(&self.preset).unwrap_or_else(|| {
            log::warn!("theme: unknown preset {:?}, using dark", self.preset);
            Theme::default()
        });
        base.with_overrides(&self.colors)
    }
}

/// Parse a color string into a ratatui Color
///
/// Supports:
/// - Named colors: "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "gray"
/// - Light variants: "light_red", "light_green", etc.
/// - RGB hex: "#RRGGBB" or "RRGGBB"
/// - RGB decimal: "rgb(R,G,B)"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "white" => return Some(Color::White),
        "gray" | "grey" => return Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "light_red" | "lightred" => return Some(Color::LightRed),
        "light_green" | "lightgreen" => return Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => return Some(Color::LightYellow),
        "light_blue" | "lightblue" => return Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => return Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => return Some(Color::LightCyan),
        "reset" => return Some(Color::Reset),
        _ => {}
    }

    let hex = s.strip_prefix('#').unwrap_or(&s);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse().ok()?;
            let g = parts[1].trim().parse().ok()?;
            let b = parts[2].trim().parse().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("BLUE"), Some(Color::Blue));
        assert_eq!(parse_color("dark_gray"), Some(Color::DarkGray));
        assert_eq!(parse_color("nope"), None);
    }

    #[test]
    fn test_parse_hex_and_rgb_colors() {
        assert_eq!(parse_color("#424242"), Some(Color::Rgb(0x42, 0x42, 0x42)));
        assert_eq!(parse_color("eeeeee"), Some(Color::Rgb(0xEE, 0xEE, 0xEE)));
        assert_eq!(parse_color("rgb(21, 21, 21)"), Some(Color::Rgb(21, 21, 21)));
        assert_eq!(parse_color("rgb(300,0,0)"), None);
    }

    #[test]
    fn test_theme_presets() {
        assert!(Theme::by_name("dark").is_some());
        assert!(Theme::by_name("Classic").is_some());
        assert!(Theme::by_name("light").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_overrides_and_unknown_preset() {
        let mut config = ThemeConfig { preset: "classic".to_string(), ..ThemeConfig::default() };
        config.colors.insert("label_fg".to_string(), "yellow".to_string());
        config.colors.insert("no_such_key".to_string(), "red".to_string());
        config.colors.insert("viewport_bg".to_string(), "not a color".to_string());

        let theme = config.build_theme();
        assert_eq!(theme.label_fg, Color::Yellow);
        assert_eq!(theme.viewport_bg, Theme::classic().viewport_bg);

        let fallback = ThemeConfig { preset: "mauve".to_string(), ..ThemeConfig::default() }.build_theme();
        assert_eq!(fallback, Theme::dark());
    }
}

//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::layout::{GridGeometry, Size};
use crate::state::ViewGeometry;
use crate::ui::ThemeConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Icon grid and chrome sizes (in terminal cells)
    pub layout: LayoutConfig,
    /// Theme settings
    pub theme: ThemeConfig,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeyBindings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Longest wait for input before the next frame is drawn
    pub frame_delay_ms: u64,
    /// Run files when they are clicked
    pub run_executables: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 100,
            run_executables: true,
        }
    }
}

impl GeneralConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms.max(MIN_FRAME_DELAY_MS))
    }
}

const MIN_FRAME_DELAY_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub icon_width: u16,
    pub icon_height: u16,
    /// Rows between an icon and the next row, where its label goes
    pub label_height: u16,
    /// Columns the label is indented from the icon's left edge
    pub label_padding: u16,
    pub address_bar_height: u16,
    pub left_margin: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_width: 14,
            icon_height: 5,
            label_height: 1,
            label_padding: 1,
            address_bar_height: 1,
            left_margin: 2,
        }
    }
}

impl LayoutConfig {
    /// Replace values the grid cannot work with
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.icon_width == 0 || self.icon_height == 0 {
            log::warn!(
                "config: icon size {}x{} is empty, using {}x{}",
                self.icon_width, self.icon_height, defaults.icon_width, defaults.icon_height
            );
            self.icon_width = defaults.icon_width;
            self.icon_height = defaults.icon_height;
        }
        if self.label_padding >= self.icon_width {
            log::warn!("config: label_padding {} leaves no room for labels, using 0", self.label_padding);
            self.label_padding = 0;
        }
        self
    }

    pub fn geometry(&self) -> ViewGeometry {
        ViewGeometry {
            grid: GridGeometry {
                icon: Size::new(i32::from(self.icon_width), i32::from(self.icon_height)),
                label_height: i32::from(self.label_height),
                label_padding: i32::from(self.label_padding),
            },
            address_bar_height: i32::from(self.address_bar_height),
            left_margin: i32::from(self.left_margin),
        }
    }
}

/// Keyboard shortcut configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyBindings {
    /// Custom keybindings (action -> key)
    #[serde(flatten)]
    pub bindings: HashMap<String, String>,
}

impl KeyBindings {
    /// Get the key binding for an action, falling back to default
    pub fn get(&self, action: &str) -> &str {
        self.bindings.get(action)
            .map(|s| s.as_str())
            .unwrap_or_else(|| default_keybinding(action))
    }

    /// Check if a key event matches an action
    pub fn matches(&self, action: &str, key: &crossterm::event::KeyEvent) -> bool {
        use crossterm::event::KeyCode;

        let binding = self.get(action);
        parse_key_binding(binding)
            .map(|(code, mods)| {
                if key.modifiers != mods {
                    return false;
                }
                // Letters compare case-insensitively ("Ctrl+Q" matches ctrl+q)
                match (&key.code, &code) {
                    (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(b),
                    _ => key.code == code,
                }
            })
            .unwrap_or(false)
    }
}

/// Get the default key binding for an action
pub fn default_keybinding(action: &str) -> &'static str {
    match action {
        "quit" => "Ctrl+Q",
        "quit_alt" => "Ctrl+C",
        "parent" => "Backspace",
        _ => "",
    }
}

/// Parse a key binding string like "Ctrl+C", "Alt+F1", "F10", etc.
pub fn parse_key_binding(s: &str) -> Option<(crossterm::event::KeyCode, crossterm::event::KeyModifiers)> {
    use crossterm::event::KeyModifiers;

    let s = s.trim();
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = s.split('+').collect();

    // Process modifiers (all but last part)
    while parts.len() > 1 {
        let modifier = parts.remove(0).to_lowercase();
        match modifier.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = parse_key_code(parts[0])?;
    Some((code, modifiers))
}

/// Parse a key code string
fn parse_key_code(s: &str) -> Option<crossterm::event::KeyCode> {
    use crossterm::event::KeyCode;

    let s_lower = s.to_lowercase();

    // Function keys
    if s_lower.starts_with('f') && s_lower.len() >= 2
        && let Ok(n) = s_lower[1..].parse::<u8>()
        && (1..=12).contains(&n)
    {
        return Some(KeyCode::F(n));
    }

    match s_lower.as_str() {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        _ if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// Get the config directory path for the current platform
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // Windows: %APPDATA%\gridfb
        std::env::var("APPDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("gridfb"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        // Check XDG_CONFIG_HOME first, then fall back to ~/.config
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var("HOME").ok().map(|p| PathBuf::from(p).join(".config")))
            .map(|p| p.join("gridfb"))
    }
}

/// Get the config file path
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the log file path
pub fn log_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("gridfb.log"))
}

/// Default config file content with comments
fn default_config() -> &'static str {
    r##"# gridfb configuration

[general]
# Longest wait for input between frames (milliseconds)
frame_delay_ms = 100
# Run files when they are clicked
run_executables = true

[layout]
# Sizes are in terminal cells
icon_width = 14
icon_height = 5
label_height = 1
label_padding = 1
address_bar_height = 1
left_margin = 2

[theme]
# Presets: "dark", "classic", "light"
preset = "dark"

# Override single colors of the preset (name, "#RRGGBB" or "rgb(r,g,b)")
# [theme.colors]
# viewport_bg = "#424242"
# label_fg = "white"

[keybindings]
# quit = "Ctrl+Q"
# quit_alt = "Ctrl+C"
# parent = "Backspace"
"##
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Self {
        let Some(config_path) = config_file() else {
            log::warn!("Could not determine config directory");
            return Config::default();
        };

        // Create config directory if it doesn't exist
        if let Some(config_dir) = config_path.parent()
            && !config_dir.exists()
            && let Err(e) = fs::create_dir_all(config_dir)
        {
            log::warn!("Could not create config directory: {}", e);
            return Config::default();
        }

        // Create default config if it doesn't exist
        if !config_path.exists()
            && let Err(e) = fs::write(&config_path, default_config())
        {
            log::warn!("Could not create config file: {}", e);
            return Config::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Could not parse {}: {}; using defaults", config_path.display(), e);
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", config_path.display(), e);
                Config::default()
            }
        }
    }

    /// Parse config text, repairing values the browser cannot use
    pub fn parse(content: &str) -> Result<Self, toml_edit::de::Error> {
        let mut config: Config = toml_edit::de::from_str(content)?;
        config.layout = config.layout.validated();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let config = Config::parse(default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.layout, defaults.layout);
        assert_eq!(config.general.frame_delay_ms, defaults.general.frame_delay_ms);
        assert_eq!(config.theme.preset, "dark");
        assert!(config.keybindings.bindings.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::parse("[layout]\nicon_width = 20\n\n[keybindings]\nparent = \"Alt+Up\"\n").unwrap();
        assert_eq!(config.layout.icon_width, 20);
        assert_eq!(config.layout.icon_height, 5);
        assert!(config.general.run_executables);
        assert_eq!(config.keybindings.get("parent"), "Alt+Up");
        assert_eq!(config.keybindings.get("quit"), "Ctrl+Q");
    }

    #[test]
    fn test_invalid_layout_is_repaired() {
        let config = Config::parse("[layout]\nicon_width = 0\nlabel_padding = 40\n").unwrap();
        assert_eq!(config.layout.icon_width, 14);
        assert_eq!(config.layout.icon_height, 5);
        assert_eq!(config.layout.label_padding, 0);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(Config::parse("[layout\nicon_width = ").is_err());
        assert!(Config::parse("[layout]\nicon_width = \"wide\"\n").is_err());
    }

    #[test]
    fn test_geometry_from_layout() {
        let geometry = LayoutConfig::default().geometry();
        assert_eq!(geometry.grid.icon, Size::new(14, 5));
        assert_eq!(geometry.grid.row_height(), 6);
        assert_eq!(geometry.address_bar_height, 1);
        assert_eq!(geometry.left_margin, 2);
    }

    #[test]
    fn test_frame_delay_has_a_floor() {
        let general = GeneralConfig { frame_delay_ms: 0, ..GeneralConfig::default() };
        assert_eq!(general.frame_delay(), Duration::from_millis(MIN_FRAME_DELAY_MS));
        assert_eq!(GeneralConfig::default().frame_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_parse_key_binding() {
        assert_eq!(parse_key_binding("Ctrl+Q"), Some((KeyCode::Char('Q'), KeyModifiers::CONTROL)));
        assert_eq!(parse_key_binding("backspace"), Some((KeyCode::Backspace, KeyModifiers::NONE)));
        assert_eq!(parse_key_binding("Alt+F4"), Some((KeyCode::F(4), KeyModifiers::ALT)));
        assert_eq!(parse_key_binding("Hyper+X"), None);
        assert_eq!(parse_key_binding("F13"), None);
    }

    #[test]
    fn test_key_matches_ignores_letter_case() {
        let keys = KeyBindings::default();
        assert!(keys.matches("quit", &KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(!keys.matches("quit", &KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!keys.matches("unknown_action", &KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}

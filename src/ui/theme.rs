use crate::controller::Level;
use ratatui::style::Color;
use std::fs;

/// Color palette used by every panel.
#[derive(Clone)]
pub struct Theme {
    pub bg: Color,

    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    pub accent: Color,
    pub accent_alt: Color,
    pub highlight: Color,

    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,

    pub border: Color,
    pub border_focused: Color,
}

impl Theme {
    /// For light terminal backgrounds
    pub fn light() -> Self {
        Self {
            // Transparent, inherits the terminal background
            bg: Color::Reset,

            fg_primary: Color::Rgb(12, 16, 24),
            fg_secondary: Color::Rgb(38, 52, 72),
            fg_muted: Color::Rgb(96, 108, 124),

            accent: Color::Rgb(30, 84, 150),
            accent_alt: Color::Rgb(112, 58, 140),
            highlight: Color::Rgb(160, 96, 20),

            success: Color::Rgb(20, 110, 60),
            info: Color::Rgb(30, 84, 150),
            warning: Color::Rgb(160, 96, 20),
            error: Color::Rgb(170, 30, 40),

            border: Color::Rgb(180, 196, 216),
            border_focused: Color::Rgb(30, 84, 150),
        }
    }

    /// For dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,

            fg_primary: Color::Rgb(240, 244, 250),
            fg_secondary: Color::Rgb(196, 206, 222),
            fg_muted: Color::Rgb(110, 120, 138),

            accent: Color::Rgb(120, 180, 255),
            accent_alt: Color::Rgb(200, 150, 255),
            highlight: Color::Rgb(255, 200, 110),

            success: Color::Rgb(110, 230, 150),
            info: Color::Rgb(120, 180, 255),
            warning: Color::Rgb(255, 200, 110),
            error: Color::Rgb(255, 110, 110),

            border: Color::Rgb(64, 76, 96),
            border_focused: Color::Rgb(120, 180, 255),
        }
    }

    /// Pick a palette from the configured mode: "light", "dark" or "auto".
    pub fn from_mode(mode: &str) -> Self {
        match mode.trim().to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ if detect_light_background() => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn level_color(&self, level: Level) -> Color {
        match level {
            Level::Success => self.success,
            Level::Info => self.info,
            Level::Warning => self.warning,
            Level::Error => self.error,
        }
    }
}

/// Guess the terminal background from `COLORFGBG` or the Alacritty theme marker.
fn detect_light_background() -> bool {
    if let Ok(value) = std::env::var("COLORFGBG") {
        if let Some(bg) = parse_colorfgbg(&value) {
            return bg == 7 || bg == 15;
        }
    }

    if let Some(home) = dirs::home_dir() {
        let marker = home.join(".config/alacritty/.current-theme");
        if let Ok(theme) = fs::read_to_string(marker) {
            return theme.to_lowercase().contains("light");
        }
    }

    false
}

/// Background index from a `fg;bg` (or `fg;default;bg`) pair.
fn parse_colorfgbg(value: &str) -> Option<u8> {
    value.rsplit(';').next()?.trim().parse().ok()
}

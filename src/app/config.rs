use crate::store::{LocalStore, UPLOADS_DIR};
use crate::utils::expand_tilde;
use anyhow::Result;
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// HTTP fetch policy. Requests are never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Overall request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// TCP connect timeout (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Downloads directory; unset means `$HOME/Downloads` (`%USERPROFILE%` on Windows)
    #[serde(default)]
    pub downloads_dir: Option<String>,
    /// Where uploaded wallpapers are saved, relative to the working directory
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
}

fn default_uploads_dir() -> String {
    UPLOADS_DIR.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Fetch a preview image for the highlighted list entry
    #[serde(default = "default_list_preview")]
    pub list_preview: bool,
}

fn default_list_preview() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: String, // "auto", "light", "dark"
}

/// Missing keys keep their default binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub view: String,
    pub back: String,
    pub download: String,
    pub apply: String,
    pub info: String,
    pub search: String,
    pub upload: String,
    pub quit: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            downloads_dir: None,
            uploads_dir: default_uploads_dir(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            list_preview: default_list_preview(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "auto".to_string(),
        }
    }
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            view: "Enter".to_string(),
            back: "b".to_string(),
            download: "d".to_string(),
            apply: "a".to_string(),
            info: "i".to_string(),
            search: "/".to_string(),
            upload: "u".to_string(),
            quit: "q".to_string(),
        }
    }
}

impl KeybindingsConfig {
    /// Parse a keybinding string into a KeyCode
    pub fn parse_key(s: &str) -> Option<KeyCode> {
        let s = s.trim();

        // Single character
        if s.chars().count() == 1 {
            if let Some(ch) = s.chars().next() {
                return Some(KeyCode::Char(ch));
            }
        }

        // Named keys (case insensitive)
        match s.to_lowercase().as_str() {
            "enter" | "return" => Some(KeyCode::Enter),
            "esc" | "escape" => Some(KeyCode::Esc),
            "tab" => Some(KeyCode::Tab),
            "backtab" | "shift+tab" | "s-tab" => Some(KeyCode::BackTab),
            "space" => Some(KeyCode::Char(' ')),
            "backspace" => Some(KeyCode::Backspace),
            "delete" | "del" => Some(KeyCode::Delete),
            "home" => Some(KeyCode::Home),
            "end" => Some(KeyCode::End),
            "pageup" | "pgup" => Some(KeyCode::PageUp),
            "pagedown" | "pgdn" => Some(KeyCode::PageDown),
            "up" | "arrow_up" => Some(KeyCode::Up),
            "down" | "arrow_down" => Some(KeyCode::Down),
            "left" | "arrow_left" => Some(KeyCode::Left),
            "right" | "arrow_right" => Some(KeyCode::Right),
            other => other
                .strip_prefix('f')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=12).contains(n))
                .map(KeyCode::F),
        }
    }

    /// Check if a KeyCode matches a keybinding
    pub fn matches(&self, key: KeyCode, binding: &str) -> bool {
        Self::parse_key(binding) == Some(key)
    }
}

impl Config {
    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mrmattias", "wallbrowse")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from file, creating default if missing or corrupt.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let data = fs::read_to_string(&path)?;
            match toml::from_str::<Config>(&data) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!("failed to parse config at {}: {}", path.display(), e);
                    eprintln!(
                        "Warning: Failed to parse config at {}: {}",
                        path.display(),
                        e
                    );
                    eprintln!("Using default configuration.");
                    Ok(Config::default())
                }
            }
        } else {
            // Create default config.
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save config to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(&path, data)?;

        Ok(())
    }

    pub fn timeouts(&self) -> (Duration, Duration) {
        (
            Duration::from_secs(self.network.connect_timeout_secs),
            Duration::from_secs(self.network.timeout_secs),
        )
    }

    /// Build the local store, preferring an explicit downloads directory.
    pub fn local_store(&self, downloads_dir: Option<PathBuf>) -> LocalStore {
        let downloads = downloads_dir.or_else(|| {
            self.storage
                .downloads_dir
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(expand_tilde)
        });
        LocalStore::new(downloads, expand_tilde(&self.storage.uploads_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_characters_and_names() {
        assert_eq!(KeybindingsConfig::parse_key("d"), Some(KeyCode::Char('d')));
        assert_eq!(KeybindingsConfig::parse_key("/"), Some(KeyCode::Char('/')));
        assert_eq!(KeybindingsConfig::parse_key(" Enter "), Some(KeyCode::Enter));
        assert_eq!(KeybindingsConfig::parse_key("ESC"), Some(KeyCode::Esc));
        assert_eq!(KeybindingsConfig::parse_key("space"), Some(KeyCode::Char(' ')));
        assert_eq!(KeybindingsConfig::parse_key("F5"), Some(KeyCode::F(5)));
        assert_eq!(KeybindingsConfig::parse_key("f13"), None);
        assert_eq!(KeybindingsConfig::parse_key("ctrl+x"), None);
    }

    #[test]
    fn default_bindings_match_expected_keys() {
        let kb = KeybindingsConfig::default();
        assert!(kb.matches(KeyCode::Char('d'), &kb.download));
        assert!(kb.matches(KeyCode::Enter, &kb.view));
        assert!(!kb.matches(KeyCode::Char('x'), &kb.quit));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [network]
            timeout_secs = 5

            [storage]
            downloads_dir = "/tmp/walls"
            "#,
        )
        .expect("parse");

        assert_eq!(config.network.timeout_secs, 5);
        assert_eq!(config.network.connect_timeout_secs, 10);
        assert_eq!(config.storage.uploads_dir, "uploaded_wallpapers");
        assert!(config.display.list_preview);
        assert_eq!(config.keybindings.apply, "a");
    }

    #[test]
    fn partial_keybindings_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [keybindings]
            download = "D"
            "#,
        )
        .expect("parse");

        assert_eq!(config.keybindings.download, "D");
        assert_eq!(config.keybindings.back, "b");
        assert_eq!(config.theme.mode, "auto");
    }

    #[test]
    fn local_store_prefers_explicit_directory() {
        let mut config = Config::default();
        config.storage.downloads_dir = Some("/from/config".to_string());

        let store = config.local_store(Some(PathBuf::from("/from/flag")));
        assert_eq!(store.downloads_dir().expect("dir"), PathBuf::from("/from/flag"));

        let store = config.local_store(None);
        assert_eq!(store.downloads_dir().expect("dir"), PathBuf::from("/from/config"));
        assert_eq!(store.uploads_dir(), std::path::Path::new("uploaded_wallpapers"));
    }
}

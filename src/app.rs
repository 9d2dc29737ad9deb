use crate::catalog::{Catalog, WallpaperRecord};
use crate::controller::Level;
use crate::fetch::{ImageFetcher, ImageSource};
use crate::session::SessionState;
use crate::store::LocalStore;
use crate::ui::theme::Theme;
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};
use std::path::PathBuf;

mod actions;
mod commands;
mod config;
mod navigation;
mod preview;
mod runtime;
mod search;

pub use config::Config;
pub use runtime::run_tui;

/// A line shown under the header until the next action replaces it.
pub struct StatusMessage {
    pub level: Level,
    pub text: String,
}

/// UI-related transient state (popups, input modes, messages).
pub struct UiState {
    pub should_quit: bool,
    pub show_help: bool,
    /// Keystrokes go to the search box
    pub search_mode: bool,
    pub command_mode: bool,
    pub command_buffer: String,
    pub status: Option<StatusMessage>,
    /// Name/tags popup opened by the info action
    pub info_popup: Option<String>,
    pub last_upload: Option<PathBuf>,
    pub theme: Theme,
}

impl UiState {
    fn new(theme: Theme) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            search_mode: false,
            command_mode: false,
            command_buffer: String::new(),
            status: None,
            info_popup: None,
            last_upload: None,
            theme,
        }
    }
}

/// Search text and the list cursor over its matches.
#[derive(Default)]
pub struct BrowseState {
    pub query: String,
    /// Catalog indices matching `query`, in catalog order
    pub visible: Vec<usize>,
    pub cursor: usize,
}

/// The image currently on screen, fetched for one record.
pub struct Preview {
    pub name: String,
    pub size: Option<(u32, u32)>,
    pub protocol: Option<Box<dyn StatefulProtocol>>,
    pub error: Option<String>,
}

/// Terminal image rendering state.
pub struct PreviewState {
    pub picker: Option<Picker>,
    pub current: Option<Preview>,
}

pub struct App {
    pub catalog: Catalog,
    pub config: Config,
    pub session: SessionState,
    pub ui: UiState,
    pub browse: BrowseState,
    pub preview: PreviewState,
    source: Box<dyn ImageSource>,
    store: LocalStore,
}

impl App {
    /// Create the app with the built-in catalog and an HTTP fetcher.
    pub fn new(config: Config, downloads_dir: Option<PathBuf>) -> Self {
        let (connect_timeout, timeout) = config.timeouts();
        let source = Box::new(ImageFetcher::new(connect_timeout, timeout));
        let store = config.local_store(downloads_dir);

        // Query the terminal for font size and graphics protocol (Kitty, Sixel, ...).
        let picker = Some(Self::new_picker());

        Self::with_parts(config, Catalog::builtin(), source, store, picker)
    }

    /// Assemble an app from explicit parts. No terminal or network access.
    pub fn with_parts(
        config: Config,
        catalog: Catalog,
        source: Box<dyn ImageSource>,
        store: LocalStore,
        picker: Option<Picker>,
    ) -> Self {
        let theme = Theme::from_mode(&config.theme.mode);
        let mut app = Self {
            catalog,
            config,
            session: SessionState::new(),
            ui: UiState::new(theme),
            browse: BrowseState::default(),
            preview: PreviewState {
                picker,
                current: None,
            },
            source,
            store,
        };
        app.update_visible();
        app
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Record open in the detail view, if any.
    pub fn selected_wallpaper(&self) -> Option<&WallpaperRecord> {
        self.session.selected_wallpaper()
    }

    /// Whether `record` counts as downloaded (this session or on disk).
    pub fn is_downloaded(&self, record: &WallpaperRecord) -> bool {
        self.session.is_downloaded(&record.name) || self.store.is_on_disk(record)
    }

    pub fn set_status(&mut self, level: Level, text: impl Into<String>) {
        self.ui.status = Some(StatusMessage {
            level,
            text: text.into(),
        });
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::controller::tests::FakeSource;
    use tempfile::TempDir;

    /// App over the built-in catalog with a fake fetcher and temp storage.
    pub(crate) fn test_app(tmp: &TempDir) -> App {
        test_app_with(tmp, FakeSource::ok())
    }

    pub(crate) fn test_app_with(tmp: &TempDir, source: FakeSource) -> App {
        let mut config = Config::default();
        config.theme.mode = "dark".to_string();
        let store = LocalStore::new(
            Some(tmp.path().join("Downloads")),
            tmp.path().join("uploaded_wallpapers"),
        );
        App::with_parts(config, Catalog::builtin(), Box::new(source), store, None)
    }

    #[test]
    fn new_app_lists_every_record() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let app = test_app(&tmp);
        assert_eq!(app.browse.visible, (0..app.catalog.records().len()).collect::<Vec<_>>());
        assert!(app.session.is_list_view());
        assert!(app.ui.status.is_none());
    }
}

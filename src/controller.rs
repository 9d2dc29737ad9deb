//! Session reducer
//!
//! `Controller::dispatch` takes the current [`SessionState`] and an [`Action`]
//! and returns the next state together with an [`Outcome`] for the user.
//! Side effects (network, filesystem) happen only for `Download`.

use crate::catalog::WallpaperRecord;
use crate::fetch::ImageSource;
use crate::session::{SessionState, View};
use crate::store::LocalStore;
use std::path::PathBuf;

/// User intents understood by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the detail view for a record.
    Select(WallpaperRecord),
    /// Return to the list view.
    Back,
    /// Save the selected wallpaper into the downloads directory.
    Download,
    /// Mark the selected wallpaper as applied. See [`ApplyEffect`].
    Apply,
    /// Show name and tags of the selected wallpaper.
    Info,
}

/// What "apply" does to the desktop.
///
/// There is no OS integration: applying records the flag and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyEffect {
    Simulated,
}

/// Where an existing download was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadMark {
    Session,
    Disk,
}

/// Severity used for coloring messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened(String),
    Closed,
    Downloaded(PathBuf),
    AlreadyDownloaded(DownloadMark),
    DownloadFailed(String),
    Applied(ApplyEffect),
    AlreadyApplied,
    Info { name: String, tags: Vec<String> },
    /// The action has no meaning in the current view.
    Ignored,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Opened(name) => format!("Viewing {}", name),
            Outcome::Closed => "Back to list".to_string(),
            Outcome::Downloaded(path) => format!("Downloaded to {}", path.display()),
            Outcome::AlreadyDownloaded(DownloadMark::Session) => "Already Downloaded".to_string(),
            Outcome::AlreadyDownloaded(DownloadMark::Disk) => {
                "Already Downloaded in Directory".to_string()
            }
            Outcome::DownloadFailed(e) => format!("Download failed: {}", e),
            Outcome::Applied(ApplyEffect::Simulated) => {
                "Applied as wallpaper (symbolic)".to_string()
            }
            Outcome::AlreadyApplied => "Already Applied".to_string(),
            Outcome::Info { name, tags } => {
                format!("Wallpaper Name: {}\nTags: {}", name, tags.join(", "))
            }
            Outcome::Ignored => "Open a wallpaper first".to_string(),
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Outcome::Downloaded(_) | Outcome::Applied(_) => Level::Success,
            Outcome::Opened(_)
            | Outcome::Closed
            | Outcome::AlreadyDownloaded(_)
            | Outcome::AlreadyApplied
            | Outcome::Info { .. } => Level::Info,
            Outcome::Ignored => Level::Warning,
            Outcome::DownloadFailed(_) => Level::Error,
        }
    }
}

/// Applies actions to session state using a fetcher and a store.
pub struct Controller<'a> {
    source: &'a dyn ImageSource,
    store: &'a LocalStore,
}

impl<'a> Controller<'a> {
    pub fn new(source: &'a dyn ImageSource, store: &'a LocalStore) -> Self {
        Self { source, store }
    }

    pub fn dispatch(&self, mut state: SessionState, action: Action) -> (SessionState, Outcome) {
        let outcome = match action {
            Action::Select(record) => {
                let name = record.name.clone();
                state.view = View::Detail(record);
                Outcome::Opened(name)
            }
            Action::Back => {
                if state.is_list_view() {
                    Outcome::Ignored
                } else {
                    state.view = View::List;
                    Outcome::Closed
                }
            }
            Action::Download => match state.selected_wallpaper().cloned() {
                Some(record) => self.download(&mut state, &record),
                None => Outcome::Ignored,
            },
            Action::Apply => match state.selected_wallpaper().map(|r| r.name.clone()) {
                Some(name) => {
                    if state.applied.insert(name) {
                        Outcome::Applied(ApplyEffect::Simulated)
                    } else {
                        Outcome::AlreadyApplied
                    }
                }
                None => Outcome::Ignored,
            },
            Action::Info => match state.selected_wallpaper() {
                Some(record) => Outcome::Info {
                    name: record.name.clone(),
                    tags: record.tags.clone(),
                },
                None => Outcome::Ignored,
            },
        };

        tracing::debug!(?outcome, "action dispatched");
        (state, outcome)
    }

    fn download(&self, state: &mut SessionState, record: &WallpaperRecord) -> Outcome {
        if state.is_downloaded(&record.name) {
            return Outcome::AlreadyDownloaded(DownloadMark::Session);
        }
        let path = match self.store.download_path(record) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(name = %record.name, "download target unavailable: {}", e);
                return Outcome::DownloadFailed(e.to_string());
            }
        };
        if path.exists() {
            return Outcome::AlreadyDownloaded(DownloadMark::Disk);
        }

        let fetched = match self.source.fetch(&record.url) {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!(name = %record.name, "download fetch failed: {}", e);
                return Outcome::DownloadFailed(e.to_string());
            }
        };
        let jpeg = match fetched.jpeg_bytes() {
            Ok(jpeg) => jpeg,
            Err(e) => {
                tracing::warn!(name = %record.name, "download encode failed: {}", e);
                return Outcome::DownloadFailed(e.to_string());
            }
        };

        match self.store.save_download(&path, &jpeg) {
            Ok(()) => {
                tracing::info!(name = %record.name, path = %path.display(), "wallpaper downloaded");
                state.downloaded.insert(record.name.clone());
                Outcome::Downloaded(path)
            }
            Err(e) => {
                tracing::warn!(name = %record.name, "download write failed: {}", e);
                Outcome::DownloadFailed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::fetch::{tests::png_bytes, FetchedImage};
    use std::cell::Cell;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    /// Serves a fixed PNG and counts requests.
    pub(crate) struct FakeSource {
        pub calls: Cell<usize>,
        pub fail: bool,
    }

    impl FakeSource {
        pub(crate) fn ok() -> Self {
            Self {
                calls: Cell::new(0),
                fail: false,
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                calls: Cell::new(0),
                fail: true,
            }
        }
    }

    impl ImageSource for FakeSource {
        fn fetch(&self, _url: &str) -> Result<FetchedImage, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY));
            }
            FetchedImage::decode(png_bytes())
        }
    }

    fn moon_art() -> WallpaperRecord {
        WallpaperRecord::new("Moon Art", "https://example.invalid/moon", &["aesthetic moon", "moon"])
    }

    fn glass_guitar() -> WallpaperRecord {
        WallpaperRecord::new("Glass Guitar", "https://example.invalid/guitar", &["guitar", "glass"])
    }

    fn temp_store() -> (TempDir, LocalStore) {
        let tmp = tempdir().expect("tempdir");
        let store = LocalStore::new(
            Some(tmp.path().join("Downloads")),
            tmp.path().join("uploaded_wallpapers"),
        );
        (tmp, store)
    }

    fn opened(controller: &Controller, record: WallpaperRecord) -> SessionState {
        let (state, outcome) = controller.dispatch(SessionState::new(), Action::Select(record));
        assert!(matches!(outcome, Outcome::Opened(_)));
        state
    }

    #[test]
    fn select_then_back_returns_to_list_for_any_record() {
        let source = FakeSource::ok();
        let (_tmp, store) = temp_store();
        let controller = Controller::new(&source, &store);

        for record in [moon_art(), glass_guitar()] {
            let state = opened(&controller, record.clone());
            assert_eq!(state.selected_wallpaper(), Some(&record));

            let (state, outcome) = controller.dispatch(state, Action::Back);
            assert_eq!(outcome, Outcome::Closed);
            assert!(state.is_list_view());
            assert!(state.selected_wallpaper().is_none());
        }
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn select_in_detail_view_switches_record() {
        let source = FakeSource::ok();
        let (_tmp, store) = temp_store();
        let controller = Controller::new(&source, &store);

        let state = opened(&controller, moon_art());
        let (state, outcome) = controller.dispatch(state, Action::Select(glass_guitar()));
        assert_eq!(outcome, Outcome::Opened("Glass Guitar".to_string()));
        assert_eq!(state.selected_wallpaper(), Some(&glass_guitar()));
    }

    #[test]
    fn detail_actions_are_ignored_in_list_view() {
        let source = FakeSource::ok();
        let (_tmp, store) = temp_store();
        let controller = Controller::new(&source, &store);

        for action in [Action::Back, Action::Download, Action::Apply, Action::Info] {
            let (state, outcome) = controller.dispatch(SessionState::new(), action);
            assert_eq!(outcome, Outcome::Ignored);
            assert_eq!(state, SessionState::new());
        }
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn download_writes_once_then_reports_already_downloaded() {
        let source = FakeSource::ok();
        let (tmp, store) = temp_store();
        let controller = Controller::new(&source, &store);
        let expected = tmp.path().join("Downloads").join("Moon Art.jpg");

        let state = opened(&controller, moon_art());
        let (state, first) = controller.dispatch(state, Action::Download);
        assert_eq!(first, Outcome::Downloaded(expected.clone()));
        assert_eq!(first.level(), Level::Success);
        assert!(state.is_downloaded("Moon Art"));
        let written = fs::read(&expected).expect("downloaded file");
        assert_eq!(
            image::guess_format(&written).expect("format"),
            image::ImageFormat::Jpeg
        );

        let (state, second) = controller.dispatch(state, Action::Download);
        assert_eq!(second, Outcome::AlreadyDownloaded(DownloadMark::Session));
        assert_eq!(second.message(), "Already Downloaded");
        assert!(state.is_downloaded("Moon Art"));
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn existing_file_counts_as_downloaded_without_session_flag() {
        let source = FakeSource::ok();
        let (tmp, store) = temp_store();
        let downloads = tmp.path().join("Downloads");
        fs::create_dir_all(&downloads).expect("mkdir");
        fs::write(downloads.join("Moon Art.jpg"), b"older download").expect("seed");
        let controller = Controller::new(&source, &store);

        let state = opened(&controller, moon_art());
        let (state, outcome) = controller.dispatch(state, Action::Download);

        assert_eq!(outcome, Outcome::AlreadyDownloaded(DownloadMark::Disk));
        assert_eq!(outcome.message(), "Already Downloaded in Directory");
        assert!(!state.is_downloaded("Moon Art"));
        assert_eq!(source.calls.get(), 0);
        assert_eq!(
            fs::read(downloads.join("Moon Art.jpg")).expect("read"),
            b"older download"
        );
    }

    #[test]
    fn failed_fetch_leaves_state_untouched() {
        let source = FakeSource::failing();
        let (tmp, store) = temp_store();
        let controller = Controller::new(&source, &store);

        let before = opened(&controller, moon_art());
        let (after, outcome) = controller.dispatch(before.clone(), Action::Download);

        assert!(matches!(outcome, Outcome::DownloadFailed(_)));
        assert_eq!(outcome.level(), Level::Error);
        assert_eq!(after, before);
        assert!(!tmp.path().join("Downloads").join("Moon Art.jpg").exists());
    }

    #[test]
    fn unresolvable_downloads_dir_fails_without_fetching() {
        let source = FakeSource::ok();
        let tmp = tempdir().expect("tempdir");
        let store = LocalStore::without_downloads_dir(tmp.path().join("up"));
        let controller = Controller::new(&source, &store);

        let before = opened(&controller, moon_art());
        let (after, outcome) = controller.dispatch(before.clone(), Action::Download);

        assert!(matches!(outcome, Outcome::DownloadFailed(_)));
        assert!(outcome.message().contains("is not set"));
        assert_eq!(after, before);
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn failed_write_leaves_state_untouched() {
        let source = FakeSource::ok();
        let tmp = tempdir().expect("tempdir");
        let blocker = tmp.path().join("Downloads");
        fs::write(&blocker, b"a file where the directory should be").expect("seed");
        let store = LocalStore::new(Some(blocker), tmp.path().join("up"));
        let controller = Controller::new(&source, &store);

        let before = opened(&controller, moon_art());
        let (after, outcome) = controller.dispatch(before.clone(), Action::Download);

        assert!(matches!(outcome, Outcome::DownloadFailed(_)));
        assert_eq!(after, before);
    }

    #[test]
    fn apply_is_idempotent_and_simulated() {
        let source = FakeSource::ok();
        let (_tmp, store) = temp_store();
        let controller = Controller::new(&source, &store);

        let state = opened(&controller, moon_art());
        let (state, first) = controller.dispatch(state, Action::Apply);
        assert_eq!(first, Outcome::Applied(ApplyEffect::Simulated));
        assert_eq!(first.message(), "Applied as wallpaper (symbolic)");
        assert!(state.is_applied("Moon Art"));

        let (state, second) = controller.dispatch(state, Action::Apply);
        assert_eq!(second, Outcome::AlreadyApplied);
        assert!(state.is_applied("Moon Art"));
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn flags_survive_leaving_and_reopening() {
        let source = FakeSource::ok();
        let (_tmp, store) = temp_store();
        let controller = Controller::new(&source, &store);

        let state = opened(&controller, moon_art());
        let (state, _) = controller.dispatch(state, Action::Apply);
        let (state, _) = controller.dispatch(state, Action::Back);
        let (state, _) = controller.dispatch(state, Action::Select(moon_art()));
        let (_, outcome) = controller.dispatch(state, Action::Apply);

        assert_eq!(outcome, Outcome::AlreadyApplied);
    }

    #[test]
    fn info_reports_name_and_tags_without_mutation() {
        let source = FakeSource::ok();
        let (_tmp, store) = temp_store();
        let controller = Controller::new(&source, &store);

        let before = opened(&controller, moon_art());
        let (after, outcome) = controller.dispatch(before.clone(), Action::Info);

        assert_eq!(after, before);
        assert_eq!(
            outcome.message(),
            "Wallpaper Name: Moon Art\nTags: aesthetic moon, moon"
        );
    }
}

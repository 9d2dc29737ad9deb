use crate::catalog::WallpaperRecord;
use std::collections::HashSet;

/// Which screen the browser is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail(WallpaperRecord),
}

/// Per-session browser state. Lives only as long as the process.
///
/// `downloaded` is a same-session fast path; the file on disk remains the
/// authoritative download marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub downloaded: HashSet<String>,
    pub applied: HashSet<String>,
    pub view: View,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record open in the detail view, if any.
    pub fn selected_wallpaper(&self) -> Option<&WallpaperRecord> {
        match &self.view {
            View::Detail(record) => Some(record),
            View::List => None,
        }
    }

    pub fn is_list_view(&self) -> bool {
        matches!(self.view, View::List)
    }

    pub fn is_downloaded(&self, name: &str) -> bool {
        self.downloaded.contains(name)
    }

    pub fn is_applied(&self, name: &str) -> bool {
        self.applied.contains(name)
    }
}

use super::App;
use crate::catalog::WallpaperRecord;

impl App {
    /// Return the record under the list cursor, if any.
    pub fn highlighted_record(&self) -> Option<&WallpaperRecord> {
        self.browse
            .visible
            .get(self.browse.cursor)
            .and_then(|&i| self.catalog.get(i))
    }

    /// Move the cursor to the next visible entry, wrapping around.
    pub fn next_entry(&mut self) {
        if !self.browse.visible.is_empty() {
            self.browse.cursor = (self.browse.cursor + 1) % self.browse.visible.len();
            self.refresh_preview_if_moved();
        }
    }

    /// Move the cursor to the previous visible entry, wrapping around.
    pub fn prev_entry(&mut self) {
        if !self.browse.visible.is_empty() {
            self.browse.cursor = if self.browse.cursor == 0 {
                self.browse.visible.len() - 1
            } else {
                self.browse.cursor - 1
            };
            self.refresh_preview_if_moved();
        }
    }

    /// Jump to the n-th visible entry (1-based).
    pub fn go_to_entry(&mut self, n: usize) -> bool {
        if n > 0 && n <= self.browse.visible.len() {
            self.browse.cursor = n - 1;
            self.refresh_preview_if_moved();
            true
        } else {
            false
        }
    }
}

use super::{App, Preview};
use crate::catalog::WallpaperRecord;
use ratatui_image::picker::Picker;

impl App {
    /// Which record the preview pane should show right now.
    fn preview_target(&self) -> Option<WallpaperRecord> {
        match self.session.selected_wallpaper() {
            Some(record) => Some(record.clone()),
            None if self.config.display.list_preview => self.highlighted_record().cloned(),
            None => None,
        }
    }

    /// Fetch the image for the current view again. Nothing is kept between
    /// fetches, so opening the same record twice downloads it twice.
    pub fn refresh_preview(&mut self) {
        self.preview.current = match self.preview_target() {
            Some(record) => Some(self.load_preview(&record)),
            None => None,
        };
    }

    /// Refresh only when the target record differs from what is on screen.
    pub(super) fn refresh_preview_if_moved(&mut self) {
        let target = self.preview_target();
        let shown = self.preview.current.as_ref().map(|p| p.name.as_str());
        if target.as_ref().map(|r| r.name.as_str()) != shown {
            self.refresh_preview();
        }
    }

    fn load_preview(&mut self, record: &WallpaperRecord) -> Preview {
        match self.source.fetch(&record.url) {
            Ok(fetched) => {
                let size = fetched.dimensions();
                let protocol = self
                    .preview
                    .picker
                    .as_mut()
                    .map(|picker| picker.new_resize_protocol(fetched.image));
                Preview {
                    name: record.name.clone(),
                    size: Some(size),
                    protocol,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(name = %record.name, "preview fetch failed: {}", e);
                Preview {
                    name: record.name.clone(),
                    size: None,
                    protocol: None,
                    error: Some(format!("Error loading image: {}", e)),
                }
            }
        }
    }

    pub(super) fn new_picker() -> Picker {
        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new((8, 16)));
        picker.guess_protocol();
        picker
    }

    /// Font size may change with the window; re-detect and redraw the image.
    pub fn handle_resize(&mut self) {
        if self.preview.picker.is_some() {
            self.preview.picker = Some(Self::new_picker());
        }
        self.refresh_preview();
    }
}

use super::App;
use crate::controller::{Action, Controller, Level, Outcome};
use crate::upload::upload_file;
use crate::utils::expand_tilde;

impl App {
    /// Run one action through the controller and reflect its outcome in the UI.
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.session);
        let (state, outcome) = {
            let controller = Controller::new(self.source.as_ref(), &self.store);
            controller.dispatch(state, action)
        };
        self.session = state;

        match &outcome {
            // View switches always redraw the image from a fresh fetch.
            Outcome::Opened(_) | Outcome::Closed => self.refresh_preview(),
            Outcome::Info { .. } => self.ui.info_popup = Some(outcome.message()),
            _ => {}
        }
        self.set_status(outcome.level(), outcome.message());
    }

    /// Open the detail view for the record under the cursor.
    pub fn open_highlighted(&mut self) {
        if let Some(record) = self.highlighted_record().cloned() {
            self.dispatch(Action::Select(record));
        }
    }

    /// Open the detail view for a record looked up by name.
    pub fn open_by_name(&mut self, name: &str) {
        match self.catalog.find(name).cloned() {
            Some(record) => self.dispatch(Action::Select(record)),
            None => self.set_status(Level::Warning, format!("No wallpaper named {}", name.trim())),
        }
    }

    /// Copy a local image into the uploads directory.
    pub fn upload(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            self.set_status(Level::Warning, "Usage: :upload <path>");
            return;
        }

        match upload_file(&expand_tilde(path), &self.store) {
            Ok(saved) => {
                self.set_status(Level::Success, format!("Saved to {}", saved.display()));
                self.ui.last_upload = Some(saved);
            }
            Err(e) => {
                tracing::warn!(path, "upload failed: {}", e);
                self.set_status(Level::Error, format!("Error uploading image: {}", e));
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.ui.show_help = !self.ui.show_help;
    }
}

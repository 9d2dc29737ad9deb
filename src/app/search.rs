use super::App;

impl App {
    /// Recompute visible entries from the search text, keeping the cursor in range.
    pub fn update_visible(&mut self) {
        self.browse.visible = self.catalog.filter_indices(&self.browse.query);

        if self.browse.visible.is_empty() {
            self.browse.cursor = 0;
        } else if self.browse.cursor >= self.browse.visible.len() {
            self.browse.cursor = self.browse.visible.len() - 1;
        }
    }

    /// Replace the search text and refresh the list.
    pub fn set_query(&mut self, query: &str) {
        self.browse.query = query.to_string();
        self.browse.cursor = 0;
        self.update_visible();
        self.refresh_preview_if_moved();
    }

    pub fn enter_search_mode(&mut self) {
        self.ui.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.ui.search_mode = false;
    }

    /// Add character to the search text.
    pub fn search_input(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.browse.query);
        query.push(c);
        self.set_query(&query);
    }

    /// Remove last character from the search text.
    pub fn search_backspace(&mut self) {
        let mut query = std::mem::take(&mut self.browse.query);
        query.pop();
        self.set_query(&query);
    }

    pub fn clear_search(&mut self) {
        self.set_query("");
    }
}

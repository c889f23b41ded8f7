use crate::playback::playlist::PlaylistStore;

/// Search box state. Every keystroke refilters the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn on_input(&mut self, store: &mut PlaylistStore, query: &str) {
        self.query = query.to_string();
        store.filter(&self.query);
    }

    /// Drops the query and restores the full list. Returns whether anything changed.
    pub fn clear(&mut self, store: &mut PlaylistStore) -> bool {
        if !self.is_active() && !store.is_filtered() {
            return false;
        }
        self.query.clear();
        store.reset_view();
        true
    }
}

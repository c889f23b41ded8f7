use crate::catalog::Track;

/// The original track list plus the currently displayed subset of it.
///
/// The view is stored as original-list indices, so it is always an ordered
/// subsequence of the original list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistStore {
    tracks: Vec<Track>,
    view: Vec<usize>,
}

impl PlaylistStore {
    pub fn new(tracks: Vec<Track>) -> Self {
        let view = (0..tracks.len()).collect();
        Self { tracks, view }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    #[cfg(test)]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Original-list indices of the displayed tracks, in display order.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    pub fn is_filtered(&self) -> bool {
        self.view.len() != self.tracks.len()
    }

    /// Keep only tracks whose name contains `query`, ignoring case.
    pub fn filter(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.view = self
            .tracks
            .iter()
            .enumerate()
            .filter(|(_, track)| track.matches(&needle))
            .map(|(index, _)| index)
            .collect();
    }

    pub fn reset_view(&mut self) {
        self.view = (0..self.tracks.len()).collect();
    }

    /// Map a position in the displayed view back to the original-list index.
    pub fn resolve(&self, view_position: usize) -> Option<usize> {
        self.view.get(view_position).copied()
    }
}

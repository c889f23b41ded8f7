use crate::playback::playlist::PlaylistStore;
use crate::playback::state::PlaybackState;

/// Per-row play/pause indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    Play,
    Pause,
}

impl RowIcon {
    pub fn name(self) -> &'static str {
        match self {
            RowIcon::Play => "play",
            RowIcon::Pause => "pause",
        }
    }
}

/// One rendered playlist row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    /// Position in the displayed view.
    pub position: usize,
    /// Index into the original list.
    pub original_index: usize,
    pub name: String,
    pub singer: String,
    pub image: String,
    pub icon: RowIcon,
}

/// Build rows for the current view. Replaces whatever was rendered before.
pub fn render_rows(store: &PlaylistStore, state: &PlaybackState) -> Vec<ListRow> {
    let mut rows: Vec<ListRow> = store
        .view()
        .iter()
        .enumerate()
        .filter_map(|(position, &original_index)| {
            let track = store.get(original_index)?;
            Some(ListRow {
                position,
                original_index,
                name: track.name.clone(),
                singer: track.singer.clone(),
                image: track.image.clone(),
                icon: RowIcon::Play,
            })
        })
        .collect();
    sync_icons(&mut rows, state);
    rows
}

/// Mark the current row `Pause` while playing; every other row shows `Play`.
pub fn sync_icons(rows: &mut [ListRow], state: &PlaybackState) {
    for row in rows.iter_mut() {
        row.icon = if state.is_playing() && row.original_index == state.current_index() {
            RowIcon::Pause
        } else {
            RowIcon::Play
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::playlist::tests::sample_tracks;
    use crate::playback::state::Status;
    use proptest::prelude::*;

    fn pause_count(rows: &[ListRow]) -> usize {
        rows.iter().filter(|r| r.icon == RowIcon::Pause).count()
    }

    #[test]
    fn playing_marks_exactly_current_row() {
        let store = PlaylistStore::new(sample_tracks(&["a", "b", "c"]));
        let mut state = PlaybackState::new();
        state.select(1, 3).unwrap();
        let rows = render_rows(&store, &state);
        assert_eq!(pause_count(&rows), 1);
        assert_eq!(rows[1].icon, RowIcon::Pause);
    }

    #[test]
    fn paused_marks_no_row() {
        let store = PlaylistStore::new(sample_tracks(&["a", "b", "c"]));
        let mut state = PlaybackState::new();
        state.select(2, 3).unwrap();
        state.set_status(Status::Paused);
        let rows = render_rows(&store, &state);
        assert_eq!(pause_count(&rows), 0);
    }

    #[test]
    fn filtered_rows_keep_original_indices() {
        let mut store = PlaylistStore::new(sample_tracks(&["red", "green", "blue", "grey"]));
        store.filter("gre");
        let mut state = PlaybackState::new();
        state.select(3, 4).unwrap();
        let rows = render_rows(&store, &state);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].position, rows[0].original_index), (0, 1));
        assert_eq!((rows[1].position, rows[1].original_index), (1, 3));
        assert_eq!(rows[1].icon, RowIcon::Pause);
        assert_eq!(rows[0].icon, RowIcon::Play);
    }

    #[test]
    fn current_track_filtered_out_marks_nothing() {
        let mut store = PlaylistStore::new(sample_tracks(&["red", "green"]));
        store.filter("green");
        let mut state = PlaybackState::new();
        state.select(0, 2).unwrap();
        assert_eq!(pause_count(&render_rows(&store, &state)), 0);
    }

    proptest! {
        #[test]
        fn at_most_one_pause_row(len in 1usize..30, current in 0usize..30, playing in any::<bool>()) {
            let names: Vec<String> = (0..len).map(|i| format!("track {i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let store = PlaylistStore::new(sample_tracks(&refs));
            let mut state = PlaybackState::new();
            state.select(current % len, len).unwrap();
            if !playing {
                state.set_status(Status::Paused);
            }
            let rows = render_rows(&store, &state);
            prop_assert_eq!(pause_count(&rows), usize::from(playing));
        }
    }
}

use crate::catalog::Track;
use crate::error::PlayerError;
use crate::playback::list_view::{render_rows, ListRow};
use crate::playback::loader::{load_track, NowPlaying};
use crate::playback::media::MediaElement;
use crate::playback::playlist::PlaylistStore;
use crate::playback::progress::{seek_target, slider_gradient, Progress};
use crate::playback::search::SearchFilter;
use crate::playback::state::{PlaybackState, Status, Step};
use crate::playback::volume::VolumeControl;
use crate::settings::PlayerSettings;
use dioxus::logger::tracing::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Single owner of playback state, the playlist and the media element.
///
/// UI handlers and media events call into this; nothing else mutates
/// playback state.
pub struct Transport<M: MediaElement> {
    media: M,
    playlist: PlaylistStore,
    state: PlaybackState,
    search: SearchFilter,
    volume: VolumeControl,
    now_playing: NowPlaying,
    progress: Progress,
    settings: PlayerSettings,
    rng: StdRng,
}

impl<M: MediaElement> Transport<M> {
    pub fn new(media: M, tracks: Vec<Track>, settings: PlayerSettings) -> Self {
        Self::with_rng(media, tracks, settings, StdRng::from_entropy())
    }

    pub fn with_rng(media: M, tracks: Vec<Track>, settings: PlayerSettings, rng: StdRng) -> Self {
        let volume = VolumeControl::new(settings.initial_volume);
        let mut transport = Self {
            media,
            playlist: PlaylistStore::new(tracks),
            state: PlaybackState::new(),
            search: SearchFilter::default(),
            volume,
            now_playing: NowPlaying::default(),
            progress: Progress::default(),
            settings,
            rng,
        };
        transport.media.set_volume(volume.level());
        if transport.playlist.is_empty() {
            warn!("starting with an empty playlist");
            return transport;
        }
        transport.load(0);
        if transport.settings.autoplay_on_load {
            transport.play();
        }
        transport
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(target_arch = "wasm32")]
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn playlist(&self) -> &PlaylistStore {
        &self.playlist
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn search(&self) -> &SearchFilter {
        &self.search
    }

    pub fn volume(&self) -> &VolumeControl {
        &self.volume
    }

    pub fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Rows for the current view with icons already synced.
    pub fn rows(&self) -> Vec<ListRow> {
        render_rows(&self.playlist, &self.state)
    }

    pub fn slider_background(&self) -> String {
        slider_gradient(
            self.progress.percent,
            &self.settings.accent_color,
            &self.settings.track_color,
        )
    }

    /// Main play/pause button. The media's paused flag decides the direction.
    pub fn toggle_play(&mut self) -> Status {
        if self.playlist.is_empty() {
            return self.state.status();
        }
        if self.media.is_paused() {
            self.play();
        } else {
            self.media.pause();
            self.state.set_status(Status::Paused);
        }
        self.state.status()
    }

    pub fn next(&mut self) -> Option<usize> {
        let index = self.state.next(self.playlist.len(), &mut self.rng)?;
        self.load_and_play(index);
        Some(index)
    }

    pub fn previous(&mut self) -> Option<usize> {
        let index = self.state.previous(self.playlist.len())?;
        self.load_and_play(index);
        Some(index)
    }

    /// Media finished the current track on its own.
    pub fn on_ended(&mut self) -> Option<Step> {
        let step = self.state.ended(
            self.playlist.len(),
            self.settings.ended_shuffle,
            &mut self.rng,
        )?;
        match step {
            Step::Restart(index) => {
                self.load_and_play(index);
                self.media.set_current_time(0.0);
            }
            Step::Load(index) => self.load_and_play(index),
        }
        Some(step)
    }

    /// Row activation from the full list, by original-list index.
    pub fn select_from_list(&mut self, index: usize) -> Result<usize, PlayerError> {
        let index = self.state.select(index, self.playlist.len())?;
        self.load_and_play(index);
        Ok(index)
    }

    /// Row activation from search results, by position in the filtered view.
    pub fn select_view_position(&mut self, position: usize) -> Result<usize, PlayerError> {
        let index = self
            .playlist
            .resolve(position)
            .ok_or(PlayerError::IndexOutOfRange {
                index: position,
                len: self.playlist.view().len(),
            })?;
        self.select_from_list(index)
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.state.toggle_shuffle()
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.state.toggle_repeat()
    }

    /// Media `play`/`pause` events. Keeps icons honest when the platform refuses to play.
    pub fn on_media_status(&mut self, paused: bool) {
        let status = if paused {
            Status::Paused
        } else {
            Status::Playing
        };
        self.state.set_status(status);
    }

    /// Re-reads the media's paused flag, e.g. after a deferred `play()` rejection.
    pub fn sync_media_status(&mut self) -> Status {
        self.on_media_status(self.media.is_paused());
        self.state.status()
    }

    pub fn on_time_update(&mut self) -> &Progress {
        self.progress = Progress::from_media(self.media.current_time(), self.media.duration());
        &self.progress
    }

    /// Seek-slider input. Ignored until the duration is known.
    pub fn seek(&mut self, raw_value: &str) -> Option<f64> {
        let value = raw_value.trim().parse::<f64>().ok()?;
        let target = seek_target(value, self.media.duration())?;
        self.media.set_current_time(target);
        self.on_time_update();
        Some(target)
    }

    pub fn toggle_volume_slider(&mut self) -> bool {
        self.volume.toggle()
    }

    pub fn set_volume(&mut self, raw_value: &str) -> Option<f64> {
        let level = self.volume.set_from_slider(raw_value)?;
        self.media.set_volume(level);
        Some(level)
    }

    pub fn search_input(&mut self, query: &str) {
        self.search.on_input(&mut self.playlist, query);
    }

    /// Click outside the search input and the list. Returns whether the view was reset.
    pub fn dismiss_search(&mut self) -> bool {
        self.search.clear(&mut self.playlist)
    }

    /// Status follows the media: a refused `play()` leaves it paused.
    fn play(&mut self) {
        self.media.play();
        if self.media.is_paused() {
            warn!("media refused to play");
        }
        self.sync_media_status();
    }

    fn load(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            return;
        };
        debug!("loading track {index}: {}", track.name);
        self.now_playing = load_track(&mut self.media, track, &self.settings.accent_color);
        self.progress = Progress::default();
    }

    fn load_and_play(&mut self, index: usize) {
        self.load(index);
        self.play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::list_view::RowIcon;
    use crate::playback::media::fake::FakeMedia;
    use crate::playback::playlist::tests::sample_tracks;
    use crate::settings::EndedShuffle;

    fn transport(names: &[&str]) -> Transport<FakeMedia> {
        Transport::with_rng(
            FakeMedia::default(),
            sample_tracks(names),
            PlayerSettings::default(),
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn startup_loads_first_track_paused() {
        let t = transport(&["a", "b"]);
        assert_eq!(t.media().last_source(), Some("audio/a.mp3"));
        assert_eq!(t.media().play_calls, 0);
        assert_eq!(t.media().volume, 0.8);
        assert_eq!(t.now_playing().title, "a");
        assert!(!t.is_playing());
    }

    #[test]
    fn autoplay_setting_starts_playback() {
        let settings = PlayerSettings {
            autoplay_on_load: true,
            ..PlayerSettings::default()
        };
        let t = Transport::with_rng(
            FakeMedia::default(),
            sample_tracks(&["a"]),
            settings,
            StdRng::seed_from_u64(1),
        );
        assert!(t.is_playing());
        assert_eq!(t.media().play_calls, 1);
    }

    #[test]
    fn toggle_play_follows_media_paused_flag() {
        let mut t = transport(&["a", "b"]);
        assert_eq!(t.toggle_play(), Status::Playing);
        assert!(!t.media().paused);
        assert_eq!(t.state().current_index(), 0);
        assert_eq!(t.toggle_play(), Status::Paused);
        assert!(t.media().paused);
    }

    #[test]
    fn next_and_previous_load_and_play() {
        let mut t = transport(&["a", "b", "c"]);
        assert_eq!(t.previous(), Some(2));
        assert_eq!(t.media().last_source(), Some("audio/c.mp3"));
        assert_eq!(t.next(), Some(0));
        assert_eq!(t.media().last_source(), Some("audio/a.mp3"));
        assert_eq!(t.media().play_calls, 2);
        assert!(t.is_playing());
    }

    #[test]
    fn ended_with_repeat_restarts_same_track() {
        let mut t = transport(&["a", "b"]);
        t.select_from_list(1).unwrap();
        t.toggle_repeat();
        t.toggle_shuffle();
        let sources_before = t.media().sources.len();
        assert_eq!(t.on_ended(), Some(Step::Restart(1)));
        assert_eq!(t.media().sources.len(), sources_before + 1);
        assert_eq!(t.media().last_source(), Some("audio/b.mp3"));
        assert_eq!(t.media().current_time, 0.0);
    }

    #[test]
    fn ended_sequential_advances() {
        let mut t = transport(&["a", "b"]);
        assert_eq!(t.on_ended(), Some(Step::Load(1)));
        assert_eq!(t.on_ended(), Some(Step::Load(0)));
    }

    #[test]
    fn ended_shuffle_respects_avoid_repeat_setting() {
        let settings = PlayerSettings {
            ended_shuffle: EndedShuffle::AvoidRepeat,
            ..PlayerSettings::default()
        };
        let mut t = Transport::with_rng(
            FakeMedia::default(),
            sample_tracks(&["a", "b"]),
            settings,
            StdRng::seed_from_u64(3),
        );
        t.toggle_shuffle();
        for _ in 0..20 {
            let before = t.state().current_index();
            let step = t.on_ended().unwrap();
            assert_ne!(step.index(), before);
        }
    }

    #[test]
    fn filtered_selection_resolves_to_original_index() {
        let mut t = transport(&["red", "green", "blue", "grey"]);
        t.search_input("gre");
        assert_eq!(t.select_view_position(1), Ok(3));
        assert_eq!(t.state().current_index(), 3);
        assert_eq!(t.now_playing().title, "grey");
        let rows = t.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].icon, RowIcon::Pause);
    }

    #[test]
    fn filtered_selection_out_of_range_is_rejected() {
        let mut t = transport(&["red", "green"]);
        t.search_input("green");
        assert_eq!(
            t.select_view_position(1),
            Err(PlayerError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(t.state().current_index(), 0);
    }

    #[test]
    fn outside_click_restores_full_list() {
        let mut t = transport(&["red", "green"]);
        t.search_input("zzz");
        assert!(t.rows().is_empty());
        assert!(t.dismiss_search());
        assert_eq!(t.rows().len(), 2);
        assert_eq!(t.search().query(), "");
        assert!(!t.dismiss_search());
    }

    #[test]
    fn refused_play_keeps_every_row_on_play_icon() {
        let mut t = transport(&["a", "b"]);
        t.media.reject_play = true;
        assert_eq!(t.select_from_list(1), Ok(1));
        assert!(t.media().paused);
        assert_eq!(t.is_playing(), !t.media().paused);
        assert_eq!(t.state().current_index(), 1);
        assert_eq!(t.now_playing().title, "b");
        assert!(t.rows().iter().all(|r| r.icon == RowIcon::Play));
        assert_eq!(t.toggle_play(), Status::Paused);
        assert_eq!(t.next(), Some(0));
        assert!(!t.is_playing());
    }

    #[test]
    fn refused_autoplay_starts_paused() {
        let settings = PlayerSettings {
            autoplay_on_load: true,
            ..PlayerSettings::default()
        };
        let media = FakeMedia {
            reject_play: true,
            ..FakeMedia::default()
        };
        let t = Transport::with_rng(media, sample_tracks(&["a"]), settings, StdRng::seed_from_u64(1));
        assert_eq!(t.media().play_calls, 1);
        assert!(!t.is_playing());
    }

    #[test]
    fn late_rejection_resyncs_from_media() {
        let mut t = transport(&["a", "b"]);
        t.select_from_list(1).unwrap();
        assert!(t.is_playing());
        t.media.paused = true;
        assert_eq!(t.sync_media_status(), Status::Paused);
        assert!(t.rows().iter().all(|r| r.icon == RowIcon::Play));
    }

    #[test]
    fn time_update_and_seek() {
        let mut t = transport(&["a"]);
        t.media.duration = f64::NAN;
        assert_eq!(t.seek("50"), None);
        assert_eq!(t.on_time_update().total_label(), "0:00");

        t.media.duration = 200.0;
        assert_eq!(t.seek("50"), Some(100.0));
        assert_eq!(t.media().current_time, 100.0);
        assert_eq!(t.progress().percent, 50.0);
        assert_eq!(t.progress().elapsed, "1:40");
        assert_eq!(t.progress().total_label(), "3:20");
        assert_eq!(
            t.slider_background(),
            "linear-gradient(90deg, #f806cc 50%, white 50%)"
        );
    }

    #[test]
    fn volume_slider_sets_media_volume() {
        let mut t = transport(&["a"]);
        assert!(t.toggle_volume_slider());
        assert_eq!(t.set_volume("40"), Some(0.4));
        assert_eq!(t.media().volume, 0.4);
        assert_eq!(t.set_volume(""), None);
        assert_eq!(t.media().volume, 0.4);
    }

    #[test]
    fn empty_playlist_ignores_transport_controls() {
        let mut t = transport(&[]);
        assert_eq!(t.toggle_play(), Status::Paused);
        assert_eq!(t.next(), None);
        assert_eq!(t.previous(), None);
        assert_eq!(t.on_ended(), None);
        assert_eq!(t.select_from_list(0), Err(PlayerError::EmptyPlaylist));
        assert!(t.media().sources.is_empty());
    }
}

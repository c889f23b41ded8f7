use crate::catalog::Track;
use crate::playback::media::MediaElement;

/// What the player header shows for the loaded track.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NowPlaying {
    pub title: String,
    pub singer: String,
    pub artwork: String,
    pub background: String,
}

impl NowPlaying {
    pub fn from_track(track: &Track, fallback_accent: &str) -> Self {
        Self {
            title: track.name.clone(),
            singer: track.singer.clone(),
            artwork: track.image.clone(),
            background: background_gradient(track.accent().unwrap_or(fallback_accent)),
        }
    }
}

/// Vertical two-stop gradient from the accent color into black.
pub fn background_gradient(accent: &str) -> String {
    format!("linear-gradient(180deg, {accent}, black)")
}

/// Point the media at `track` and return the header data for it. Does not start playback.
pub fn load_track<M: MediaElement>(media: &mut M, track: &Track, fallback_accent: &str) -> NowPlaying {
    media.set_source(&track.file);
    NowPlaying::from_track(track, fallback_accent)
}

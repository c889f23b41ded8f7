use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

const BUNDLED_SETTINGS_JSON: &str = include_str!("../assets/settings.json");

pub const DEFAULT_ACCENT: &str = "#f806cc";
const DEFAULT_VOLUME: f64 = 0.8;

/// What `ended` does while shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EndedShuffle {
    /// Any track may follow, including the one that just finished.
    #[default]
    AllowRepeat,
    /// Same rule as the next button: never the track that just finished.
    AvoidRepeat,
}

/// Player configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "default_track_color")]
    pub track_color: String,
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,
    #[serde(default)]
    pub ended_shuffle: EndedShuffle,
    #[serde(default)]
    pub autoplay_on_load: bool,
}

fn default_accent_color() -> String {
    DEFAULT_ACCENT.to_string()
}

fn default_track_color() -> String {
    "white".to_string()
}

fn default_initial_volume() -> f64 {
    DEFAULT_VOLUME
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            track_color: default_track_color(),
            initial_volume: default_initial_volume(),
            ended_shuffle: EndedShuffle::default(),
            autoplay_on_load: false,
        }
    }
}

impl PlayerSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }

    /// Settings compiled into the binary, falling back to defaults.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_SETTINGS_JSON).unwrap_or_else(|err| {
            warn!("bundled settings rejected, using defaults: {err}");
            Self::default()
        })
    }

    fn normalized(mut self) -> Self {
        self.initial_volume = normalize_volume(self.initial_volume);
        if self.accent_color.trim().is_empty() {
            self.accent_color = default_accent_color();
        }
        if self.track_color.trim().is_empty() {
            self.track_color = default_track_color();
        }
        self
    }
}

fn normalize_volume(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    value.clamp(0.0, 1.0)
}

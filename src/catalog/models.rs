use serde::{Deserialize, Serialize};

/// One playable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub singer: String,
    pub file: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Track {
    /// Accent color for the player background, `None` when unset or blank.
    pub fn accent(&self) -> Option<&str> {
        self.color
            .as_deref()
            .map(str::trim)
            .filter(|color| !color.is_empty())
    }

    /// Case-insensitive substring match on the track name.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
    }
}

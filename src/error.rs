use thiserror::Error;

/// Errors raised while loading the track catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no tracks")]
    Empty,
    #[error("track \"{name}\" has no media file")]
    MissingMedia { name: String },
}

/// Errors raised by transport operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("track index {index} is out of range for a playlist of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("the playlist is empty")]
    EmptyPlaylist,
}

//! The components module contains all shared components for our app.

mod app;
pub mod audio_manager;
mod icons;
mod player;
mod search_bar;
mod song_list;

pub use app::*;
pub use audio_manager::AudioController;
pub use icons::*;
pub use player::*;
pub use search_bar::*;
pub use song_list::*;

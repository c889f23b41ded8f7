//! Playback core: playlist, state machine and the transport that drives the media element.
//!
//! Nothing here touches the DOM. Components read from a [`Transport`] and
//! forward UI and media events to it.

pub mod list_view;
pub mod loader;
pub mod media;
pub mod playlist;
pub mod progress;
pub mod search;
pub mod state;
pub mod transport;
pub mod volume;

pub use list_view::ListRow;
#[cfg(not(target_arch = "wasm32"))]
pub use media::DetachedMedia;
#[cfg(target_arch = "wasm32")]
pub use media::MediaElement;
pub use transport::Transport;

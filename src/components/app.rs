use crate::catalog::bundled_catalog;
use crate::components::audio_manager::{create_audio_handle, AudioHandle};
use crate::components::{AudioController, Player, SearchBar, SongList};
use crate::playback::Transport;
use crate::settings::PlayerSettings;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

pub type PlayerTransport = Transport<AudioHandle>;

/// Context handle for the one transport of the page.
#[derive(Clone, Copy)]
pub struct TransportSignal(pub Signal<PlayerTransport>);

#[component]
pub fn AppShell() -> Element {
    let transport = use_signal(|| {
        let settings = PlayerSettings::bundled();
        let tracks = bundled_catalog().to_vec();
        info!("starting player with {} tracks", tracks.len());
        Transport::new(create_audio_handle(), tracks, settings)
    });

    use_context_provider(|| TransportSignal(transport));

    // Clicks that reach the shell landed outside the search input and the list.
    let on_outside_click = {
        let mut transport = transport;
        move |_| {
            if transport.peek().search().is_active() || transport.peek().playlist().is_filtered() {
                transport.write().dismiss_search();
            }
        }
    };

    rsx! {
        div {
            class: "app-shell min-h-screen flex items-center justify-center p-4",
            onclick: on_outside_click,
            AudioController {}
            div { class: "player-card w-full max-w-md rounded-2xl overflow-hidden shadow-2xl",
                Player {}
                div { class: "playlist-panel p-3 flex flex-col gap-2",
                    SearchBar {}
                    SongList {}
                }
            }
        }
    }
}

use crate::components::{Icon, TransportSignal};
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton, RepeatButton, ShuffleButton, VolumeControl};

/// Now-playing header, seek slider and transport controls.
#[component]
pub fn Player() -> Element {
    let mut transport = use_context::<TransportSignal>().0;

    let current = transport.read();
    let now_playing = current.now_playing().clone();
    let progress = current.progress().clone();
    let slider_background = current.slider_background();
    let total_label = progress.total_label().to_string();
    drop(current);

    let on_seek_input = move |e: Event<FormData>| {
        transport.write().seek(&e.value());
    };

    rsx! {
        div {
            class: "music-player px-6 pt-6 pb-4 text-white",
            style: "background-image: {now_playing.background};",
            div { class: "flex flex-col items-center gap-3",
                if now_playing.artwork.is_empty() {
                    div { class: "w-48 h-48 rounded-xl bg-black/30 flex items-center justify-center",
                        Icon {
                            name: "music".to_string(),
                            class: "w-16 h-16 text-white/60".to_string(),
                        }
                    }
                } else {
                    img {
                        id: "song-image",
                        src: "{now_playing.artwork}",
                        alt: "{now_playing.title}",
                        class: "w-48 h-48 rounded-xl object-cover shadow-lg",
                    }
                }
                div { class: "text-center min-w-0 w-full",
                    h2 {
                        id: "current-song-title",
                        class: "text-xl font-bold truncate",
                        "{now_playing.title}"
                    }
                    p { id: "current-singer", class: "text-sm text-white/70 truncate",
                        "{now_playing.singer}"
                    }
                }
            }

            div { class: "mt-4",
                input {
                    id: "custom-slider",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "0.1",
                    value: "{progress.percent}",
                    class: "seek-slider w-full h-1 rounded-full appearance-none cursor-pointer",
                    style: "background: {slider_background};",
                    oninput: on_seek_input,
                }
                div { class: "flex justify-between text-xs text-white/70 mt-1",
                    span { id: "current-time", "{progress.elapsed}" }
                    span { id: "total-duration", "{total_label}" }
                }
            }

            div { class: "mt-3 flex items-center justify-between",
                ShuffleButton {}
                PrevButton {}
                PlayPauseButton {}
                NextButton {}
                RepeatButton {}
                VolumeControl {}
            }
        }
    }
}

use crate::components::{Icon, TransportSignal};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

const TOGGLE_BASE: &str = "w-9 h-9 rounded-full flex items-center justify-center transition-colors";

fn toggle_style(active: bool, accent: &str) -> String {
    let color = if active { accent } else { "white" };
    format!("background-color: {color};")
}

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut transport = use_context::<TransportSignal>().0;
    let playing = transport.read().is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "w-12 h-12 rounded-full bg-white flex items-center justify-center hover:scale-105 transition-transform shadow-lg",
            onclick: move |_| {
                let status = transport.write().toggle_play();
                debug!("play/pause -> {status:?}");
            },
            Icon {
                name: if playing { "pause".to_string() } else { "play".to_string() },
                class: "w-5 h-5 text-black".to_string(),
            }
        }
    }
}

/// Previous button - always steps back in list order
#[component]
pub(super) fn PrevButton() -> Element {
    let mut transport = use_context::<TransportSignal>().0;

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "p-2 text-white/80 hover:text-white transition-colors",
            onclick: move |_| {
                transport.write().previous();
            },
            Icon {
                name: "prev".to_string(),
                class: "w-5 h-5".to_string(),
            }
        }
    }
}

/// Next button
#[component]
pub(super) fn NextButton() -> Element {
    let mut transport = use_context::<TransportSignal>().0;

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "p-2 text-white/80 hover:text-white transition-colors",
            onclick: move |_| {
                transport.write().next();
            },
            Icon {
                name: "next".to_string(),
                class: "w-5 h-5".to_string(),
            }
        }
    }
}

/// Shuffle button - toggle shuffle mode
#[component]
pub(super) fn ShuffleButton() -> Element {
    let mut transport = use_context::<TransportSignal>().0;
    let current = transport.read();
    let enabled = current.state().is_shuffling();
    let style = toggle_style(enabled, &current.settings().accent_color);
    drop(current);

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            class: if enabled { format!("{TOGGLE_BASE} active text-white") } else { format!("{TOGGLE_BASE} text-black") },
            style: "{style}",
            onclick: move |_| {
                transport.write().toggle_shuffle();
            },
            Icon {
                name: "shuffle".to_string(),
                class: "w-4 h-4".to_string(),
            }
        }
    }
}

/// Repeat button - restart the current track when it ends
#[component]
pub(super) fn RepeatButton() -> Element {
    let mut transport = use_context::<TransportSignal>().0;
    let current = transport.read();
    let enabled = current.state().is_repeating();
    let style = toggle_style(enabled, &current.settings().accent_color);
    drop(current);

    rsx! {
        button {
            id: "repeat-btn",
            r#type: "button",
            class: if enabled { format!("{TOGGLE_BASE} active text-white") } else { format!("{TOGGLE_BASE} text-black") },
            style: "{style}",
            onclick: move |_| {
                transport.write().toggle_repeat();
            },
            Icon {
                name: "repeat".to_string(),
                class: "w-4 h-4".to_string(),
            }
        }
    }
}

/// Volume button with its pop-up slider
#[component]
pub(super) fn VolumeControl() -> Element {
    let mut transport = use_context::<TransportSignal>().0;
    let current = transport.read();
    let visible = current.volume().is_visible();
    let slider_value = current.volume().slider_value();
    drop(current);

    let on_volume_change = move |e: Event<FormData>| {
        transport.write().set_volume(&e.value());
    };

    rsx! {
        div { class: "relative flex items-center",
            button {
                id: "volume-btn",
                r#type: "button",
                class: "p-2 text-white/80 hover:text-white transition-colors",
                onclick: move |_| {
                    transport.write().toggle_volume_slider();
                },
                Icon {
                    name: "volume".to_string(),
                    class: "w-5 h-5".to_string(),
                }
            }
            if visible {
                input {
                    id: "volume-slider",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{slider_value}",
                    class: "absolute bottom-10 right-0 w-28 accent-pink-500",
                    oninput: on_volume_change,
                }
            }
        }
    }
}

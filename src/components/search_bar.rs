use crate::components::{Icon, TransportSignal};
use dioxus::prelude::*;

/// Filters the playlist on every keystroke.
#[component]
pub fn SearchBar() -> Element {
    let mut transport = use_context::<TransportSignal>().0;
    let query = transport.read().search().query().to_string();

    rsx! {
        div {
            class: "relative",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            Icon {
                name: "search".to_string(),
                class: "w-4 h-4 text-zinc-400 absolute left-3 top-1/2 -translate-y-1/2".to_string(),
            }
            input {
                id: "search-bar",
                r#type: "text",
                placeholder: "Search songs",
                class: "w-full pl-9 pr-3 py-2 rounded-full bg-white/10 text-white placeholder-zinc-400 outline-none focus:ring-2 focus:ring-pink-500/60",
                value: "{query}",
                oninput: move |e: Event<FormData>| {
                    transport.write().search_input(&e.value());
                },
            }
        }
    }
}

use crate::components::{Icon, TransportSignal};
use crate::playback::ListRow;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// Playlist rows. Re-rendered in full whenever the transport changes.
#[component]
pub fn SongList() -> Element {
    let transport = use_context::<TransportSignal>().0;
    let current = transport.read();
    let rows = current.rows();
    let filtered = current.search().is_active();
    drop(current);

    rsx! {
        ul {
            id: "song-list",
            class: "song-list flex flex-col max-h-80 overflow-y-auto",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            if rows.is_empty() {
                li { class: "p-3 text-sm text-zinc-400 text-center", "No songs match your search" }
            }
            for row in rows {
                SongRow { key: "{row.original_index}", row: row.clone(), filtered }
            }
        }
    }
}

#[component]
fn SongRow(row: ListRow, filtered: bool) -> Element {
    let mut transport = use_context::<TransportSignal>().0;
    let position = row.position;
    let original_index = row.original_index;

    let on_activate = move |evt: MouseEvent| {
        evt.stop_propagation();
        // Search results resolve through the filtered view; the full list already holds original indices.
        let result = if filtered {
            transport.write().select_view_position(position)
        } else {
            transport.write().select_from_list(original_index)
        };
        if let Err(err) = result {
            warn!("row activation ignored: {err}");
        }
    };

    rsx! {
        li {
            class: "song-item flex items-center justify-between gap-3 p-2 border-b border-white/10 text-white cursor-pointer hover:bg-white/5",
            onclick: on_activate,
            div { class: "flex items-center gap-3 min-w-0",
                if row.image.is_empty() {
                    div { class: "w-10 h-10 rounded bg-zinc-800 flex items-center justify-center",
                        Icon {
                            name: "music".to_string(),
                            class: "w-5 h-5 text-zinc-500".to_string(),
                        }
                    }
                } else {
                    img {
                        src: "{row.image}",
                        alt: "{row.name}",
                        class: "w-10 h-10 rounded object-cover",
                        loading: "lazy",
                    }
                }
                div { class: "flex flex-col min-w-0",
                    span { class: "font-bold truncate", "{row.name}" }
                    small { class: "text-zinc-400 truncate", "{row.singer}" }
                }
            }
            button {
                r#type: "button",
                class: "row-play-btn w-8 h-8 rounded-full bg-black flex items-center justify-center",
                "data-icon": row.icon.name(),
                onclick: on_activate,
                Icon {
                    name: row.icon.name().to_string(),
                    class: "w-3.5 h-3.5 text-pink-500".to_string(),
                }
            }
        }
    }
}

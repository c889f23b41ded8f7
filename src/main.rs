use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod catalog;
mod components;
mod error;
mod playback;
mod settings;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#f806cc" }
        document::Title { "Pinkwave" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}

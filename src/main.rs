use dioxus::prelude::*;

mod components;
mod playback;
mod timeline;

use components::AppShell;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "AI: The Modern Developer's Superpower" }
        document::Meta {
            name: "description",
            content: "An 80 second narrated tour of how AI reshapes the developer pipeline",
        }
        document::Meta { name: "theme-color", content: "#0ea5e9" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: MAIN_CSS }

        AppShell {}
    }
}

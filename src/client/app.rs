use dioxus::prelude::*;

use crate::client::router::Route;

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER }
        Router::<Route> {}
    }
}

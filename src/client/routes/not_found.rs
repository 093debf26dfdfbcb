use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Página não encontrada | Tecnoloc" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 mt-16",
                p { class: "text-2xl", "Página não encontrada" }
                p { class: "text-sm opacity-70", "/{path}" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Voltar ao início" }
            }
        }
    )
}

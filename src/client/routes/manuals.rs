use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use tecnoloc::model::manual::{filter_manuals, ManualDto};

use crate::client::components::{ErrorAlert, Page};

#[component]
pub fn Manuals() -> Element {
    let mut manuals = use_signal(Vec::<ManualDto>::new);
    let mut search = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::api::get_json::<Vec<ManualDto>>("/api/manuals").await
        });

        use_effect(move || match &*future.read() {
            Some(Ok(list)) => {
                manuals.set(list.clone());
                loading.set(false);
            }
            Some(Err(e)) => {
                error.set(Some(e.message.clone()));
                loading.set(false);
            }
            None => (),
        });
    }

    let all = manuals.read();
    let visible: Vec<ManualDto> = filter_manuals(&all, &search.read())
        .into_iter()
        .cloned()
        .collect();

    rsx!(
        Title { "Manuais | Tecnoloc" }
        Meta {
            name: "description",
            content: "Biblioteca de manuais técnicos."
        }
        Page { heading: "Manuais",
            ErrorAlert { message: error() }
            label { class: "input w-full",
                Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                input {
                    r#type: "search",
                    class: "grow",
                    placeholder: "Buscar por título, marca ou modelo",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            if loading() {
                span { class: "loading loading-spinner" }
            } else if visible.is_empty() {
                p { class: "opacity-70", "Nenhum manual encontrado." }
            }
            for manual in visible {
                div { key: "{manual.id}", class: "collapse collapse-arrow bg-base-200",
                    input { r#type: "checkbox" }
                    div { class: "collapse-title",
                        p { class: "font-semibold", "{manual.title}" }
                        p { class: "text-xs opacity-70", "{manual.brand} · {manual.model}" }
                    }
                    div { class: "collapse-content",
                        p { class: "whitespace-pre-wrap text-sm", "{manual.content}" }
                    }
                }
            }
        }
    )
}

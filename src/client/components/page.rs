use dioxus::prelude::*;

/// Page body below the fixed navbar, optionally headed by a title.
#[component]
pub fn Page(class: Option<&'static str>, heading: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            div { class: "w-full max-w-[1024px] mx-auto flex flex-col gap-4",
                if let Some(heading) = heading {
                    h1 { class: "text-2xl font-bold mt-4", "{heading}" }
                }
                {children}
            }
        }
    )
}

use dioxus::prelude::*;

/// Inline error banner, rendered only while `message` holds something.
#[component]
pub fn ErrorAlert(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div { role: "alert", class: "alert alert-error",
                span { "{message}" }
            }
        }
    )
}

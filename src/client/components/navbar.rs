use dioxus::prelude::*;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl font-bold",
                            "Tecnoloc"
                        }
                        p { class: "text-xs",
                            "v0.1.0-Alpha.1"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "menu menu-horizontal gap-1",
                    li { Link { to: Route::Diagnostic {}, "Diagnóstico" } }
                    li { Link { to: Route::Checklist {}, "Checklist" } }
                    li { Link { to: Route::Manuals {}, "Manuais" } }
                    li { Link { to: Route::History {}, "Histórico" } }
                    li { Link { to: Route::Admin {}, "Admin" } }
                }
            }
        }

        Outlet::<Route> {}
    }
}

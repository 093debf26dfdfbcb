use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Admin, Checklist, Diagnostic, History, Home, Manuals, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/diagnostico")]
    Diagnostic {},

    #[route("/checklist")]
    Checklist {},

    #[route("/manuais")]
    Manuals {},

    #[route("/historico")]
    History {},

    #[route("/admin")]
    Admin {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

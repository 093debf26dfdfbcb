use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBook, FaClockRotateLeft, FaGear, FaListCheck, FaStethoscope,
};
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route};

#[component]
fn ToolCard(
    to: Route,
    title: &'static str,
    description: &'static str,
    children: Element,
) -> Element {
    rsx!(
        Link { to: to,
            div { class: "card bg-base-200 shadow-sm hover:shadow-md h-full",
                div { class: "card-body",
                    div { class: "flex items-center gap-2",
                        {children}
                        h2 { class: "card-title", "{title}" }
                    }
                    p { class: "text-sm", "{description}" }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Tecnoloc Assist" }
        Meta {
            name: "description",
            content: "Assistente de manutenção para técnicos de campo: diagnóstico com IA, manuais e checklists de inspeção."
        }
        Page {
            div { class: "flex flex-col items-center gap-2 mt-8",
                p { class: "text-3xl font-bold", "Tecnoloc Assist" }
                p { class: "text-center max-w-xl",
                    "Diagnóstico de defeitos com apoio de IA, consulta aos manuais técnicos e checklists de inspeção para torres de iluminação, geradores e máquinas de solda."
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4 mt-4",
                ToolCard {
                    to: Route::Diagnostic {},
                    title: "Diagnóstico",
                    description: "Descreva o defeito ou envie uma foto e receba causas prováveis e soluções passo a passo.",
                    Icon { width: 24, height: 24, icon: FaStethoscope }
                }
                ToolCard {
                    to: Route::Checklist {},
                    title: "Checklist",
                    description: "Execute a inspeção do equipamento item a item e envie o relatório ao supervisor.",
                    Icon { width: 24, height: 24, icon: FaListCheck }
                }
                ToolCard {
                    to: Route::Manuals {},
                    title: "Manuais",
                    description: "Pesquise a biblioteca de manuais por título, marca ou modelo.",
                    Icon { width: 24, height: 24, icon: FaBook }
                }
                ToolCard {
                    to: Route::History {},
                    title: "Histórico",
                    description: "Consulte os atendimentos registrados e o que resolveu cada defeito.",
                    Icon { width: 24, height: 24, icon: FaClockRotateLeft }
                }
                ToolCard {
                    to: Route::Admin {},
                    title: "Administração",
                    description: "Cadastre manuais e importe modelos de checklist.",
                    Icon { width: 24, height: 24, icon: FaGear }
                }
            }
        }
    )
}

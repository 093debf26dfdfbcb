use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use tecnoloc::model::maintenance::{LogStatus, MaintenanceLogDto};

use crate::client::components::{ErrorAlert, Page};

#[component]
pub fn History() -> Element {
    let mut logs = use_signal(Vec::<MaintenanceLogDto>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::api::get_json::<Vec<MaintenanceLogDto>>("/api/maintenance-logs").await
        });

        use_effect(move || match &*future.read() {
            Some(Ok(list)) => {
                logs.set(list.clone());
                loading.set(false);
            }
            Some(Err(e)) => {
                error.set(Some(e.message.clone()));
                loading.set(false);
            }
            None => (),
        });
    }

    rsx!(
        Title { "Histórico | Tecnoloc" }
        Meta {
            name: "description",
            content: "Histórico de atendimentos de manutenção."
        }
        Page { heading: "Histórico",
            ErrorAlert { message: error() }
            if loading() {
                span { class: "loading loading-spinner" }
            } else if logs.read().is_empty() {
                p { class: "opacity-70", "Nenhum atendimento registrado." }
            }
            for log in logs() {
                LogCard { key: "{log.id}", log }
            }
        }
    )
}

#[component]
fn LogCard(log: MaintenanceLogDto) -> Element {
    let badge = match log.status {
        LogStatus::Resolved => "badge badge-success",
        LogStatus::Pending => "badge badge-warning",
    };
    let created_at = log.created_at.format("%d/%m/%Y %H:%M").to_string();
    let name = log.equipment_name.clone().unwrap_or_default();
    let main_cause = log
        .diagnosis
        .as_ref()
        .and_then(|d| d.possible_causes.first().cloned());

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-1",
                div { class: "flex flex-wrap items-center gap-2",
                    h2 { class: "card-title", "{name}" }
                    span { class: "badge badge-outline", "{log.equipment_model}" }
                    span { class: badge, {log.status.as_str()} }
                    span { class: "text-xs opacity-70 ml-auto", "{created_at}" }
                }
                if let Some(defect) = log.defect_description.as_ref() {
                    p { span { class: "font-semibold", "Defeito: " } "{defect}" }
                }
                if let Some(cause) = main_cause {
                    p { span { class: "font-semibold", "Causa provável: " } "{cause}" }
                }
                if let Some(notes) = log.technician_notes.as_ref().filter(|n| !n.trim().is_empty()) {
                    p { span { class: "font-semibold", "Solução aplicada: " } "{notes}" }
                }
            }
        }
    )
}

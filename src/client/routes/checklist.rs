use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;

use tecnoloc::{
    checklist::{validate_report, ChecklistRun},
    model::checklist::{
        ChecklistReportDto, ChecklistReportReceiptDto, ChecklistTemplateDto, EquipmentType,
    },
};

use crate::client::components::{ErrorAlert, Page};

#[component]
pub fn Checklist() -> Element {
    let mut equipment_type = use_signal(|| EquipmentType::Torre);
    let mut templates = use_signal(Vec::<ChecklistTemplateDto>::new);
    let mut selected = use_signal(|| Option::<ChecklistTemplateDto>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut receipt = use_signal(|| Option::<ChecklistReportReceiptDto>::None);

    // Reload the templates whenever the equipment type changes
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            use crate::client::api;

            let url = format!(
                "/api/checklists/templates?equipment_type={}",
                equipment_type().as_str()
            );
            api::get_json::<Vec<ChecklistTemplateDto>>(&url).await
        });

        use_effect(move || match &*future.read() {
            Some(Ok(list)) => {
                templates.set(list.clone());
                error.set(None);
            }
            Some(Err(e)) => error.set(Some(e.message.clone())),
            None => (),
        });
    }

    rsx!(
        Title { "Checklist | Tecnoloc" }
        Meta {
            name: "description",
            content: "Checklists de inspeção de equipamentos."
        }
        Page { heading: "Checklist",
            ErrorAlert { message: error() }
            if let Some(done) = receipt() {
                div { role: "alert", class: "alert alert-success flex flex-col items-start",
                    span { class: "font-semibold", "Checklist finalizado!" }
                    span { "{done.checked_items} de {done.total_items} itens verificados." }
                    if let Some(email) = done.supervisor_email.as_ref() {
                        span { "Relatório encaminhado para {email}." }
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| receipt.set(None),
                    "Novo checklist"
                }
            } else if let Some(template) = selected() {
                ChecklistRunner {
                    template,
                    on_cancel: move |_| selected.set(None),
                    on_finished: move |done| {
                        selected.set(None);
                        receipt.set(Some(done));
                    },
                }
            } else {
                div { role: "tablist", class: "tabs tabs-box",
                    for kind in EquipmentType::SELECTABLE {
                        button {
                            role: "tab",
                            class: if equipment_type() == kind { "tab tab-active" } else { "tab" },
                            onclick: move |_| equipment_type.set(kind),
                            {kind.label()}
                        }
                    }
                }
                if templates.read().is_empty() {
                    p { class: "opacity-70", "Nenhum modelo de checklist para este equipamento." }
                }
                ul { class: "list bg-base-200 rounded-box",
                    for template in templates() {
                        li { key: "{template.id}", class: "list-row items-center",
                            div {
                                p { class: "font-semibold", "{template.name}" }
                                p { class: "text-xs opacity-70",
                                    {format!("{} itens", template.total_items())}
                                }
                            }
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: {
                                    let template = template.clone();
                                    move |_| selected.set(Some(template.clone()))
                                },
                                "Iniciar"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ChecklistRunner(
    template: ChecklistTemplateDto,
    on_cancel: EventHandler<()>,
    on_finished: EventHandler<ChecklistReportReceiptDto>,
) -> Element {
    let mut run = use_signal(ChecklistRun::new);
    let mut report = use_signal(ChecklistReportDto::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);

    let (checked, total) = run.read().progress(&template);
    let pending_critical: Vec<String> = run
        .read()
        .pending_critical(&template)
        .into_iter()
        .map(|item| item.label.clone())
        .collect();
    let pending_labels = pending_critical.join(", ");

    let finish_template = template.clone();
    let finish = move |evt: FormEvent| {
        evt.prevent_default();

        let mut submission = report.read().clone();
        submission.template_id = finish_template.id.clone();
        submission.equipment_name = Some(finish_template.name.clone());
        submission.checked_items = run.read().checked_items(&finish_template);

        if let Err(e) = validate_report(&submission, &finish_template) {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        sending.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::api;

            match api::post_json::<_, ChecklistReportReceiptDto>("/api/checklists/reports", &submission)
                .await
            {
                Ok(done) => {
                    run.write().reset();
                    on_finished.call(done);
                }
                Err(e) => error.set(Some(e.message)),
            }
            sending.set(false);
        });
    };

    rsx!(
        div { class: "flex flex-col gap-1",
            h2 { class: "text-xl font-semibold", "{template.name}" }
            progress { class: "progress progress-primary w-full", value: "{checked}", max: "{total}" }
            p { class: "text-sm", "{checked} de {total} itens verificados" }
        }
        if !pending_critical.is_empty() {
            div { role: "alert", class: "alert alert-warning",
                Icon { width: 16, height: 16, icon: FaTriangleExclamation }
                span { "Itens críticos pendentes: {pending_labels}" }
            }
        }
        for section in template.sections.iter() {
            div { class: "card bg-base-200",
                div { class: "card-body gap-2",
                    h3 { class: "card-title", "{section.title}" }
                    for item in section.items.iter() {
                        ChecklistRow {
                            key: "{item.id}",
                            label: item.label.clone(),
                            critical: item.critical,
                            checked: run.read().is_checked(&item.id),
                            on_toggle: {
                                let id = item.id.clone();
                                move |_| {
                                    run.write().toggle(&id);
                                }
                            },
                        }
                    }
                }
            }
        }
        form { class: "card bg-base-200", onsubmit: finish,
            div { class: "card-body gap-2",
                h3 { class: "card-title", "Finalizar checklist" }
                ErrorAlert { message: error() }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                    input {
                        class: "input w-full",
                        placeholder: "Patrimônio *",
                        value: "{report.read().patrimonio}",
                        oninput: move |evt| report.write().patrimonio = evt.value(),
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Horímetro",
                        value: report.read().horimetro.clone().unwrap_or_default(),
                        oninput: move |evt| report.write().horimetro = Some(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Nome do Técnico *",
                        value: "{report.read().technician_name}",
                        oninput: move |evt| report.write().technician_name = evt.value(),
                    }
                    input {
                        r#type: "email",
                        class: "input w-full",
                        placeholder: "E-mail do supervisor",
                        value: report.read().supervisor_email.clone().unwrap_or_default(),
                        oninput: move |evt| report.write().supervisor_email = Some(evt.value()),
                    }
                }
                textarea {
                    class: "textarea w-full",
                    placeholder: "Observações",
                    value: report.read().observation.clone().unwrap_or_default(),
                    oninput: move |evt| report.write().observation = Some(evt.value()),
                }
                div { class: "flex gap-2",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: sending(),
                        "Finalizar"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                }
            }
        }
    )
}

#[component]
fn ChecklistRow(label: String, critical: bool, checked: bool, on_toggle: EventHandler<()>) -> Element {
    rsx!(
        label { class: "label cursor-pointer justify-start gap-3",
            input {
                r#type: "checkbox",
                class: "checkbox checkbox-primary",
                checked: checked,
                onchange: move |_| on_toggle.call(()),
            }
            span { "{label}" }
            if critical {
                span { class: if checked { "badge badge-success badge-sm" } else { "badge badge-error badge-sm" },
                    "Crítico"
                }
            }
        }
    )
}

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCamera, FaTriangleExclamation, FaWrench};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use tecnoloc::{
    diagnosis::{validate_form, ImagePayload},
    model::diagnosis::{Diagnosis, DiagnosisRequestDto, Solution},
};

use crate::client::components::{ErrorAlert, Page};

/// Badge colour for the difficulty the model assigned to a solution.
fn difficulty_class(difficulty: &str) -> &'static str {
    match difficulty.trim().to_lowercase().as_str() {
        "fácil" | "facil" => "badge badge-success",
        "média" | "media" => "badge badge-warning",
        "difícil" | "dificil" => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

#[component]
pub fn Diagnostic() -> Element {
    let mut details = use_signal(DiagnosisRequestDto::default);
    let mut photo = use_signal(|| Option::<ImagePayload>::None);
    let mut diagnosis = use_signal(|| Option::<Diagnosis>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut request = details.read().clone();
        request.image = photo.read().as_ref().map(ImagePayload::to_data_url);

        if let Err(e) = validate_form(&request) {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        loading.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::api;

            match api::post_json::<_, Diagnosis>("/api/diagnosis", &request).await {
                Ok(result) => diagnosis.set(Some(result)),
                Err(e) => {
                    tracing::error!("Diagnosis request failed: {}", e);
                    error.set(Some(e.message));
                }
            }
            loading.set(false);
        });
    };

    let pick_photo = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };

        match file.read_bytes().await {
            Ok(bytes) => {
                let mime_type = file.content_type().unwrap_or_default();
                photo.set(Some(ImagePayload::from_bytes(&mime_type, &bytes)));
            }
            Err(e) => error.set(Some(format!("Não foi possível ler a foto: {}", e))),
        }
    };

    let reset = move |_| {
        details.set(DiagnosisRequestDto::default());
        photo.set(None);
        diagnosis.set(None);
        error.set(None);
    };

    rsx!(
        Title { "Diagnóstico | Tecnoloc" }
        Meta {
            name: "description",
            content: "Diagnóstico de defeitos em equipamentos com apoio de IA."
        }
        Page { heading: "Diagnóstico",
            ErrorAlert { message: error() }
            if let Some(result) = diagnosis() {
                DiagnosisResult { request: details(), diagnosis: result }
                button { class: "btn btn-outline", onclick: reset, "Novo diagnóstico" }
            } else {
                form { class: "flex flex-col gap-3", onsubmit: submit,
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Equipamento *" }
                        input {
                            class: "input w-full",
                            placeholder: "Ex.: Torre de Iluminação",
                            value: "{details.read().equipment_name}",
                            oninput: move |evt| details.write().equipment_name = evt.value(),
                        }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                        fieldset { class: "fieldset",
                            legend { class: "fieldset-legend", "Marca" }
                            input {
                                class: "input w-full",
                                value: "{details.read().brand}",
                                oninput: move |evt| details.write().brand = evt.value(),
                            }
                        }
                        fieldset { class: "fieldset",
                            legend { class: "fieldset-legend", "Modelo" }
                            input {
                                class: "input w-full",
                                value: "{details.read().model}",
                                oninput: move |evt| details.write().model = evt.value(),
                            }
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Descrição do defeito" }
                        textarea {
                            class: "textarea w-full h-32",
                            placeholder: "O que está acontecendo com o equipamento?",
                            value: "{details.read().defect_description}",
                            oninput: move |evt| details.write().defect_description = evt.value(),
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend flex gap-2 items-center",
                            Icon { width: 16, height: 16, icon: FaCamera }
                            "Foto do defeito"
                        }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            class: "file-input w-full",
                            onchange: pick_photo,
                        }
                        if let Some(image) = photo() {
                            img { class: "max-h-48 rounded mt-2", src: image.to_data_url() }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: loading(),
                        if loading() {
                            span { class: "loading loading-spinner" }
                            "Analisando..."
                        } else {
                            "Diagnosticar"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn DiagnosisResult(request: DiagnosisRequestDto, diagnosis: Diagnosis) -> Element {
    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body",
                h2 { class: "card-title", "Causas prováveis" }
                if diagnosis.possible_causes.is_empty() {
                    p { class: "opacity-70", "Nenhuma causa identificada." }
                }
                ul { class: "list-disc pl-6",
                    for cause in diagnosis.possible_causes.iter() {
                        li { "{cause}" }
                    }
                }
            }
        }
        for (index, solution) in diagnosis.solutions.iter().enumerate() {
            SolutionCard { key: "{index}", solution: solution.clone() }
        }
        FeedbackForm { request: request.clone(), diagnosis: diagnosis.clone() }
    )
}

#[component]
fn SolutionCard(solution: Solution) -> Element {
    let badge = difficulty_class(&solution.difficulty);
    let tools = solution.tools_needed.join(", ");

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body gap-3",
                div { class: "flex flex-wrap items-center gap-2",
                    Icon { width: 18, height: 18, icon: FaWrench }
                    h3 { class: "card-title", "{solution.title}" }
                    if !solution.difficulty.is_empty() {
                        span { class: badge, "{solution.difficulty}" }
                    }
                    if !solution.estimated_time.is_empty() {
                        span { class: "badge badge-outline", "{solution.estimated_time}" }
                    }
                }
                ol { class: "list-decimal pl-6",
                    for step in solution.steps.iter() {
                        li { "{step}" }
                    }
                }
                if !solution.tools_needed.is_empty() {
                    p { class: "text-sm",
                        span { class: "font-semibold", "Ferramentas: " }
                        "{tools}"
                    }
                }
                for warning in solution.warnings.iter() {
                    div { role: "alert", class: "alert alert-warning",
                        Icon { width: 16, height: 16, icon: FaTriangleExclamation }
                        span { "{warning}" }
                    }
                }
            }
        }
    )
}

#[component]
fn FeedbackForm(request: DiagnosisRequestDto, diagnosis: Diagnosis) -> Element {
    let mut notes = use_signal(String::new);
    let mut saved = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let send = use_callback(move |was_effective: bool| {
        let feedback = tecnoloc::model::maintenance::RecordFeedbackDto {
            equipment_model: request.model.clone(),
            equipment_name: Some(request.equipment_name.clone()),
            defect_description: Some(request.defect_description.clone()),
            technician_notes: Some(notes()),
            diagnosis: Some(diagnosis.clone()),
            was_effective,
        };

        if feedback.equipment_model.trim().is_empty() {
            error.set(Some("Informe o modelo do equipamento.".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            use tecnoloc::model::maintenance::MaintenanceLogDto;

            use crate::client::api;

            match api::post_json::<_, MaintenanceLogDto>("/api/maintenance-logs", &feedback).await {
                Ok(_) => {
                    error.set(None);
                    saved.set(true);
                }
                Err(e) => error.set(Some(e.message)),
            }
        });
    });

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-3",
                h2 { class: "card-title", "A solução funcionou?" }
                ErrorAlert { message: error() }
                if saved() {
                    div { role: "alert", class: "alert alert-success",
                        span { "Atendimento registrado no histórico." }
                    }
                } else {
                    textarea {
                        class: "textarea w-full",
                        placeholder: "O que foi feito para resolver?",
                        value: "{notes}",
                        oninput: move |evt| notes.set(evt.value()),
                    }
                    div { class: "flex gap-2",
                        button { class: "btn btn-success", onclick: move |_| send.call(true), "Resolvido" }
                        button { class: "btn btn-outline", onclick: move |_| send.call(false), "Pendente" }
                    }
                }
            }
        }
    )
}

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFileImport, FaTrash};
use dioxus_free_icons::Icon;

use tecnoloc::model::{
    checklist::{ChecklistTemplateDto, ImportTemplateDto},
    manual::{ManualDto, SaveManualDto},
};

use crate::client::components::{ErrorAlert, Page};

const MANUAL_CATEGORIES: [(&str, &str); 2] = [("eletrico", "Elétrico"), ("mecanico", "Mecânico")];

#[component]
pub fn Admin() -> Element {
    // Bumped after every change so the lists below refetch
    let revision = use_signal(|| 0u32);

    rsx!(
        Title { "Administração | Tecnoloc" }
        Meta {
            name: "description",
            content: "Cadastro de manuais e modelos de checklist."
        }
        Page { heading: "Administração",
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                ManualForm { revision }
                TemplateImport { revision }
            }
            ManualList { revision }
            TemplateList { revision }
        }
    )
}

#[component]
fn ManualForm(revision: Signal<u32>) -> Element {
    let mut revision = revision;
    let mut manual = use_signal(SaveManualDto::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    // Message of the 409 answer while the user decides whether to overwrite
    let mut conflict = use_signal(|| Option::<String>::None);

    let save = use_callback(move |overwrite: bool| {
        let mut request = manual.read().clone();
        request.overwrite = overwrite;

        if request.title.trim().is_empty() || request.model.trim().is_empty() {
            error.set(Some("Preencha o título e o modelo do manual.".to_string()));
            return;
        }

        error.set(None);
        conflict.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::api;

            match api::post_json::<_, ManualDto>("/api/manuals", &request).await {
                Ok(saved) => {
                    notice.set(Some(format!("Manual {} salvo.", saved.model)));
                    manual.set(SaveManualDto::default());
                    revision += 1;
                }
                Err(e) if e.status == 409 => conflict.set(Some(e.message)),
                Err(e) => error.set(Some(e.message)),
            }
        });
    });

    rsx!(
        form {
            class: "card bg-base-200",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                save.call(false);
            },
            div { class: "card-body gap-2",
                h2 { class: "card-title", "Cadastrar manual" }
                ErrorAlert { message: error() }
                if let Some(message) = notice() {
                    div { role: "alert", class: "alert alert-success", span { "{message}" } }
                }
                if let Some(message) = conflict() {
                    div { role: "alert", class: "alert alert-warning flex flex-col items-start",
                        span { "{message} Deseja sobrescrever?" }
                        div { class: "flex gap-2",
                            button {
                                r#type: "button",
                                class: "btn btn-warning btn-sm",
                                onclick: move |_| save.call(true),
                                "Sobrescrever"
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| conflict.set(None),
                                "Cancelar"
                            }
                        }
                    }
                }
                input {
                    class: "input w-full",
                    placeholder: "Título *",
                    value: "{manual.read().title}",
                    oninput: move |evt| manual.write().title = evt.value(),
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                    input {
                        class: "input w-full",
                        placeholder: "Marca",
                        value: "{manual.read().brand}",
                        oninput: move |evt| manual.write().brand = evt.value(),
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Modelo *",
                        value: "{manual.read().model}",
                        oninput: move |evt| manual.write().model = evt.value(),
                    }
                }
                select {
                    class: "select w-full",
                    onchange: move |evt| {
                        let value = evt.value();
                        manual.write().category = (!value.is_empty()).then_some(value);
                    },
                    option { value: "", "Categoria" }
                    for (value, label) in MANUAL_CATEGORIES {
                        option {
                            value,
                            selected: manual.read().category.as_deref() == Some(value),
                            {label}
                        }
                    }
                }
                textarea {
                    class: "textarea w-full h-48",
                    placeholder: "Conteúdo técnico do manual",
                    value: "{manual.read().content}",
                    oninput: move |evt| manual.write().content = evt.value(),
                }
                button { r#type: "submit", class: "btn btn-primary", "Salvar manual" }
            }
        }
    )
}

#[component]
fn TemplateImport(revision: Signal<u32>) -> Element {
    let mut revision = revision;
    let mut error = use_signal(|| Option::<String>::None);
    let mut imported = use_signal(|| Option::<String>::None);

    let pick_file = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let request = ImportTemplateDto {
            file_name: file.name(),
        };

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::api;

            match api::post_json::<_, ChecklistTemplateDto>(
                "/api/checklists/templates/import",
                &request,
            )
            .await
            {
                Ok(template) => {
                    error.set(None);
                    imported.set(Some(template.name));
                    revision += 1;
                }
                Err(e) => error.set(Some(e.message)),
            }
        });
    };

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title flex gap-2 items-center",
                    Icon { width: 18, height: 18, icon: FaFileImport }
                    "Importar modelo de checklist"
                }
                p { class: "text-sm",
                    "Envie o documento de inspeção (PDF, planilha ou imagem) para gerar um novo modelo."
                }
                ErrorAlert { message: error() }
                if let Some(name) = imported() {
                    div { role: "alert", class: "alert alert-success", span { "Modelo \"{name}\" importado." } }
                }
                input {
                    r#type: "file",
                    class: "file-input w-full",
                    accept: ".pdf,.xlsx,.xls,.csv,image/*",
                    onchange: pick_file,
                }
            }
        }
    )
}

#[component]
fn ManualList(revision: Signal<u32>) -> Element {
    let mut revision = revision;
    let mut manuals = use_signal(Vec::<ManualDto>::new);
    let mut error = use_signal(|| Option::<String>::None);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = revision();
            crate::client::api::get_json::<Vec<ManualDto>>("/api/manuals").await
        });

        use_effect(move || match &*future.read() {
            Some(Ok(list)) => manuals.set(list.clone()),
            Some(Err(e)) => error.set(Some(e.message.clone())),
            None => (),
        });
    }

    let remove = use_callback(move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match crate::client::api::delete(&format!("/api/manuals/{}", id)).await {
                Ok(()) => revision += 1,
                Err(e) => error.set(Some(e.message)),
            }
        });
    });

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title", "Manuais cadastrados" }
                ErrorAlert { message: error() }
                ul { class: "list",
                    for manual in manuals() {
                        li { key: "{manual.id}", class: "list-row items-center",
                            div {
                                p { class: "font-semibold", "{manual.title}" }
                                p { class: "text-xs opacity-70", "{manual.brand} · {manual.model}" }
                            }
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| remove.call(manual.id),
                                Icon { width: 14, height: 14, icon: FaTrash }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn TemplateList(revision: Signal<u32>) -> Element {
    let mut revision = revision;
    let mut templates = use_signal(Vec::<ChecklistTemplateDto>::new);
    let mut error = use_signal(|| Option::<String>::None);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = revision();
            crate::client::api::get_json::<Vec<ChecklistTemplateDto>>("/api/checklists/templates")
                .await
        });

        use_effect(move || match &*future.read() {
            Some(Ok(list)) => templates.set(list.clone()),
            Some(Err(e)) => error.set(Some(e.message.clone())),
            None => (),
        });
    }

    let remove = use_callback(move |id: String| {
        #[cfg(feature = "web")]
        spawn(async move {
            match crate::client::api::delete(&format!("/api/checklists/templates/{}", id)).await {
                Ok(()) => revision += 1,
                Err(e) => error.set(Some(e.message)),
            }
        });
    });

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title", "Modelos de checklist" }
                ErrorAlert { message: error() }
                ul { class: "list",
                    for template in templates() {
                        li { key: "{template.id}", class: "list-row items-center",
                            div {
                                p { class: "font-semibold", "{template.name}" }
                                p { class: "text-xs opacity-70", {template.equipment_type.label()} }
                            }
                            if template.built_in {
                                span { class: "badge badge-ghost", "Padrão" }
                            } else {
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    onclick: {
                                        let id = template.id.clone();
                                        move |_| remove.call(id.clone())
                                    },
                                    Icon { width: 14, height: 14, icon: FaTrash }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

use crate::model::checklist::{ChecklistItem, ChecklistSection, ChecklistTemplateDto, EquipmentType};

pub(crate) fn item(id: &str, label: &str, critical: bool) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label: label.to_string(),
        critical,
    }
}

pub(crate) fn section(
    title: &str,
    category: Option<&str>,
    items: Vec<ChecklistItem>,
) -> ChecklistSection {
    ChecklistSection {
        title: title.to_string(),
        category: category.map(str::to_string),
        items,
    }
}

/// Templates shipped with the application.
pub fn built_in_templates() -> Vec<ChecklistTemplateDto> {
    vec![
        ChecklistTemplateDto {
            id: "gerador-padrao".to_string(),
            name: "Gerador de Energia (Modelo Básico)".to_string(),
            equipment_type: EquipmentType::Gerador,
            sections: vec![section(
                "Motor e Fluidos",
                None,
                vec![
                    item("oleo", "Nível do óleo e viscosidade", false),
                    item("agua", "Nível da água do radiador", false),
                    item("vazamentos", "Vazamentos aparentes", false),
                ],
            )],
            built_in: true,
        },
        ChecklistTemplateDto {
            id: "torre-mlt6skd".to_string(),
            name: "Torre MLT6SKD".to_string(),
            equipment_type: EquipmentType::Torre,
            sections: vec![
                section(
                    "Motor e Níveis",
                    Some("preventiva"),
                    vec![
                        item("oleo_motor", "Nível de óleo do motor", true),
                        item("agua_radiador", "Nível de água do radiador", true),
                        item("vazamentos", "Vazamentos de fluidos", true),
                    ],
                ),
                section(
                    "Sistema Elétrico",
                    Some("funcionamento"),
                    vec![
                        item("bateria", "Bateria e cabos", false),
                        item("lampadas", "Lâmpadas dos refletores", false),
                        item("painel", "Painel de controle", true),
                    ],
                ),
                section(
                    "Estrutura",
                    Some("carenagem"),
                    vec![
                        item("pneus", "Pneus e calibragem", false),
                        item("patolas", "Patolas de fixação", true),
                        item("pintura", "Pintura e adesivos", false),
                    ],
                ),
            ],
            built_in: true,
        },
    ]
}

pub fn find_built_in(id: &str) -> Option<ChecklistTemplateDto> {
    built_in_templates().into_iter().find(|t| t.id == id)
}

/// Keeps the templates for an equipment type, or all of them when no type is given.
pub fn templates_for(
    templates: Vec<ChecklistTemplateDto>,
    equipment_type: Option<EquipmentType>,
) -> Vec<ChecklistTemplateDto> {
    match equipment_type {
        Some(equipment_type) => templates
            .into_iter()
            .filter(|t| t.equipment_type == equipment_type)
            .collect(),
        None => templates,
    }
}

use crate::{
    checklist::catalog::{item, section},
    model::checklist::{ChecklistTemplateDto, EquipmentType},
};

/// Derives a checklist template from the name of an uploaded inspection document.
///
/// Documents for the F-170 lighting tower form (file names containing `torre` or `170`)
/// produce the full tower inspection; anything else produces a generic three item checklist.
/// `created_at_millis` makes the template id unique.
pub fn template_from_upload(file_name: &str, created_at_millis: i64) -> ChecklistTemplateDto {
    let is_tower = file_name.to_lowercase().contains("torre") || file_name.contains("170");

    if is_tower {
        tower_f170(created_at_millis)
    } else {
        generic(file_name, created_at_millis)
    }
}

fn generic(file_name: &str, created_at_millis: i64) -> ChecklistTemplateDto {
    ChecklistTemplateDto {
        id: format!("custom-{}", created_at_millis),
        name: format!("Checklist Genérico ({})", file_name),
        equipment_type: EquipmentType::Custom,
        sections: vec![section(
            "Itens Gerais Identificados",
            None,
            vec![
                item("item_1", "Verificação de Estado Geral", false),
                item("item_2", "Funcionamento Operacional", false),
                item("item_3", "Limpeza e Conservação", false),
            ],
        )],
        built_in: false,
    }
}

fn tower_f170(created_at_millis: i64) -> ChecklistTemplateDto {
    ChecklistTemplateDto {
        id: format!("torre-f170-{}", created_at_millis),
        name: "Torre de Iluminação (Modelo F-170 Completo)".to_string(),
        equipment_type: EquipmentType::Torre,
        sections: vec![
            section(
                "1. Filtros e Fluidos (Preventiva)",
                Some("preventiva"),
                vec![
                    item("f_ar", "Filtro de ar Primário", false),
                    item("f_comb_prim", "Filtro de combustível primário", false),
                    item("f_comb_sec", "Filtro de combustível secundário", false),
                    item("f_oleo", "Filtro de Óleo", false),
                    item("oleo_lub", "Óleo lubrificante (Nível e Estado)", true),
                    item("oleo_motor", "Verificar nível de óleo motor", true),
                ],
            ),
            section(
                "2. Motor e Arrefecimento",
                Some("funcionamento"),
                vec![
                    item("correia", "Condição e tensionamento da correia do alternador", false),
                    item("arrefecimento", "Sistema de arrefecimento (Nível e Qualidade)", true),
                    item("pescador", "Verificar pescador do tanque de combustível", false),
                    item("bomba_transf", "Bomba de transferência (Motores CAT)", false),
                    item("parafusos_motor", "Verificar parafusos e coxins do motor", false),
                    item("mangueira_oleo", "Mangueira e registro para retirada de óleo", false),
                ],
            ),
            section(
                "3. Sistema Elétrico",
                Some("funcionamento"),
                vec![
                    item("alt_tensao", "Tensão de saída do alternador C.C", false),
                    item("bateria_polos", "Bateria (Suporte, tensão, fixação dos polos)", false),
                    item("teste_bateria", "Teste de carga da bateria (com testador)", false),
                    item("tomadas", "Tensão de saída das tomadas", false),
                    item("disjuntor", "Disjuntor Geral e teste de lâmpadas", true),
                    item("lacre_painel", "Lacre de verificação no interior do painel", false),
                    item("cabos_painel", "Cabos e componentes do painel (Aperto/Oxidação)", false),
                ],
            ),
            section(
                "4. Estrutura e Mecânica",
                Some("carenagem"),
                vec![
                    item("patolas", "Niveladores (Patolas) e funcionamento", true),
                    item("pinos_trava", "Pinos trava das patolas e mastro", true),
                    item("mastro_rot", "Rotação do mastro e pino de travamento", true),
                    item("catracas", "Verificar funcionamento das catracas", false),
                    item("cambao", "Verificar cambão e reboque", false),
                    item("pneus", "Pneus (Estado e Calibragem)", false),
                    item("marcador_rodas", "Marcador químico nas porcas de roda", false),
                    item("portas", "Portas (Alinhamento, travas, dobradiças)", false),
                    item("parafusos_geral", "Conferir aperto de parafusos GERAL", false),
                ],
            ),
            section(
                "5. Iluminação",
                Some("funcionamento"),
                vec![
                    item("lampadas", "Lâmpadas e Refletores (Funcionamento)", false),
                    item("limpeza_lentes", "Limpeza interna das lentes dos refletores", false),
                ],
            ),
            section(
                "6. Limpeza e Acabamento",
                Some("limpeza"),
                vec![
                    item("limp_tanque", "Limpeza do tanque de combustível", false),
                    item("limp_motor", "Limpeza do motor", false),
                    item("limp_radiador", "Limpeza do radiador", false),
                    item("adesivacao", "Adesivação (Tecnoloc, Preventiva)", false),
                    item("pintura", "Pintura do equipamento (Retoques necessários?)", false),
                ],
            ),
        ],
        built_in: false,
    }
}

// src/services/status_engine.rs

use chrono::NaiveDate;

use crate::models::etapa::{Etapa, StatusEtapa};

// ---
// Motor de status
// ---
// Função pura: (data prevista, data real, hoje) -> status. É a única fonte
// de verdade do campo `status`; todo caminho de escrita e de agregação passa
// por aqui. `NaiveDate` já tem granularidade de dia, então não há componente
// de hora a descartar.
//
// Ordem de decisão (a ordem importa):
//   1. data real presente  -> concluído (com atraso se real > prevista);
//      conclusão antecipada conta como 'concluido'
//   2. sem data prevista   -> pendente
//   3. hoje > prevista     -> atrasado
//   4. hoje == prevista    -> em andamento
//   5. hoje < prevista     -> pendente
pub fn calcular_status(
    data_prevista: Option<NaiveDate>,
    data_real: Option<NaiveDate>,
    hoje: NaiveDate,
) -> StatusEtapa {
    if let Some(real) = data_real {
        if let Some(prevista) = data_prevista {
            if real > prevista {
                return StatusEtapa::ConcluidoAtraso;
            }
        }
        return StatusEtapa::Concluido;
    }

    let Some(prevista) = data_prevista else {
        return StatusEtapa::Pendente;
    };

    if hoje > prevista {
        StatusEtapa::Atrasado
    } else if hoje == prevista {
        StatusEtapa::EmAndamento
    } else {
        StatusEtapa::Pendente
    }
}

/// Parser leniente de datas ISO (`YYYY-MM-DD`), usado pela importação.
/// Valores vazios ou inválidos degradam para `None` (ramo "sem data" do
/// motor de status), nunca para erro.
pub fn parse_data(valor: &str) -> Option<NaiveDate> {
    let valor = valor.trim();
    if valor.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(valor, "%Y-%m-%d").ok()
}

/// Rederiva o status de toda a coleção para a data de hoje. Usado nos
/// caminhos de leitura/agregação: o valor persistido é só um cache, e uma
/// etapa vira 'atrasado' com o passar dos dias sem nenhuma escrita.
pub fn atualizar_colecao(etapas: &mut [Etapa], hoje: NaiveDate) {
    for etapa in etapas {
        etapa.status = calcular_status(etapa.data_prevista, etapa.data_real, hoje);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn sem_datas_e_sempre_pendente() {
        let hoje = data(2024, 1, 6);
        assert_eq!(calcular_status(None, None, hoje), StatusEtapa::Pendente);
    }

    #[test]
    fn apenas_prevista_depende_de_hoje() {
        let prevista = data(2024, 1, 6);

        // hoje antes da prevista -> pendente
        assert_eq!(
            calcular_status(Some(prevista), None, data(2024, 1, 5)),
            StatusEtapa::Pendente
        );
        // hoje é o dia previsto -> em andamento
        assert_eq!(
            calcular_status(Some(prevista), None, data(2024, 1, 6)),
            StatusEtapa::EmAndamento
        );
        // hoje depois da prevista -> atrasado
        assert_eq!(
            calcular_status(Some(prevista), None, data(2024, 1, 7)),
            StatusEtapa::Atrasado
        );
    }

    #[test]
    fn real_depois_da_prevista_e_concluido_com_atraso() {
        let hoje = data(2024, 6, 1);
        assert_eq!(
            calcular_status(Some(data(2024, 1, 5)), Some(data(2024, 1, 6)), hoje),
            StatusEtapa::ConcluidoAtraso
        );
    }

    #[test]
    fn real_no_prazo_ou_antecipada_e_concluido() {
        let hoje = data(2024, 6, 1);
        // No prazo exato
        assert_eq!(
            calcular_status(Some(data(2024, 1, 5)), Some(data(2024, 1, 5)), hoje),
            StatusEtapa::Concluido
        );
        // Antecipada: colapsa em 'concluido' (regra canônica)
        assert_eq!(
            calcular_status(Some(data(2024, 1, 5)), Some(data(2024, 1, 3)), hoje),
            StatusEtapa::Concluido
        );
    }

    #[test]
    fn real_sem_prevista_e_concluido() {
        // O valor de 'hoje' é irrelevante quando há data real
        for hoje in [data(2020, 1, 1), data(2030, 12, 31)] {
            assert_eq!(
                calcular_status(None, Some(data(2024, 1, 6)), hoje),
                StatusEtapa::Concluido
            );
        }
    }

    #[test]
    fn status_independe_de_hoje_quando_concluida() {
        let prevista = Some(data(2024, 1, 5));
        let real = Some(data(2024, 1, 6));
        for hoje in [data(2023, 1, 1), data(2024, 1, 5), data(2025, 7, 9)] {
            assert_eq!(
                calcular_status(prevista, real, hoje),
                StatusEtapa::ConcluidoAtraso
            );
        }
    }

    #[test]
    fn atualizar_colecao_rederiva_com_o_passar_dos_dias() {
        use chrono::Utc;
        use uuid::Uuid;

        let agora = Utc::now();
        let mut etapas = vec![Etapa {
            id: Uuid::new_v4(),
            periodo_id: Uuid::new_v4(),
            nome: "Fechamento de estoque".to_string(),
            area: None,
            responsavel: None,
            ordem: 0,
            data_prevista: Some(data(2024, 1, 6)),
            data_real: None,
            status: StatusEtapa::Pendente,
            criado_em: agora,
            atualizado_em: agora,
        }];

        atualizar_colecao(&mut etapas, data(2024, 1, 6));
        assert_eq!(etapas[0].status, StatusEtapa::EmAndamento);

        atualizar_colecao(&mut etapas, data(2024, 1, 8));
        assert_eq!(etapas[0].status, StatusEtapa::Atrasado);
    }

    #[test]
    fn parse_data_aceita_iso_e_degrada_para_none() {
        assert_eq!(parse_data("2024-01-06"), Some(data(2024, 1, 6)));
        assert_eq!(parse_data(" 2024-01-06 "), Some(data(2024, 1, 6)));
        assert_eq!(parse_data(""), None);
        assert_eq!(parse_data("   "), None);
        // Formato brasileiro não é aceito aqui: o chamador converte antes
        assert_eq!(parse_data("06/01/2024"), None);
        assert_eq!(parse_data("2024-13-40"), None);
        assert_eq!(parse_data("nunca"), None);
    }
}

// src/services/notificacao_service.rs

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::EmpresaRepository,
    models::{
        etapa::{Etapa, StatusEtapa},
        notificacao::{Alertas, EtapaAlerta},
    },
    services::dashboard_service::DashboardService,
};

// ---
// Detecção de alertas
// ---
// O backend apenas detecta e serve as listas de alerta; o disparo de
// e-mail fica com um colaborador externo que consome este serviço.

#[derive(Clone)]
pub struct NotificacaoService {
    dashboard_service: DashboardService,
    empresa_repo: EmpresaRepository,
}

impl NotificacaoService {
    pub fn new(dashboard_service: DashboardService, empresa_repo: EmpresaRepository) -> Self {
        Self {
            dashboard_service,
            empresa_repo,
        }
    }

    pub async fn alertas(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
    ) -> Result<Alertas, AppError> {
        let empresa = self
            .empresa_repo
            .find_by_id(empresa_id)
            .await?
            .ok_or(AppError::EmpresaNotFound)?;

        let etapas = self
            .dashboard_service
            .etapas_do_escopo(empresa_id, periodo_id, None)
            .await?;

        let hoje = Utc::now().date_naive();

        Ok(Alertas {
            proximas_prazo: proximas_do_prazo(&etapas, hoje, empresa.dias_antecedencia),
            atrasadas: em_atraso(&etapas, hoje),
            dias_antecedencia: empresa.dias_antecedencia,
        })
    }
}

/// Etapas sem data real cuja data prevista cai na janela de antecedência
/// [hoje, hoje + dias_antecedencia]. `dias` é a distância até o prazo.
pub fn proximas_do_prazo(
    etapas: &[Etapa],
    hoje: NaiveDate,
    dias_antecedencia: i32,
) -> Vec<EtapaAlerta> {
    etapas
        .iter()
        .filter(|e| e.data_real.is_none())
        .filter_map(|e| {
            let prevista = e.data_prevista?;
            let dias = prevista.signed_duration_since(hoje).num_days();
            if dias >= 0 && dias <= i64::from(dias_antecedencia) {
                Some(EtapaAlerta {
                    etapa: e.clone(),
                    dias,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Etapas com status 'atrasado'; `dias` é há quantos dias o prazo venceu.
pub fn em_atraso(etapas: &[Etapa], hoje: NaiveDate) -> Vec<EtapaAlerta> {
    etapas
        .iter()
        .filter(|e| e.status == StatusEtapa::Atrasado)
        .map(|e| {
            let dias = e
                .data_prevista
                .map(|prevista| hoje.signed_duration_since(prevista).num_days())
                .unwrap_or(0);
            EtapaAlerta {
                etapa: e.clone(),
                dias,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    fn etapa(
        nome: &str,
        prevista: Option<NaiveDate>,
        real: Option<NaiveDate>,
        status: StatusEtapa,
    ) -> Etapa {
        let agora = Utc::now();
        Etapa {
            id: Uuid::new_v4(),
            periodo_id: Uuid::new_v4(),
            nome: nome.to_string(),
            area: None,
            responsavel: None,
            ordem: 0,
            data_prevista: prevista,
            data_real: real,
            status,
            criado_em: agora,
            atualizado_em: agora,
        }
    }

    #[test]
    fn janela_de_antecedencia_inclui_as_bordas() {
        let hoje = data(2024, 1, 6);
        let etapas = vec![
            // Vence hoje: dias == 0, entra
            etapa("Hoje", Some(hoje), None, StatusEtapa::EmAndamento),
            // Vence no limite da janela: entra
            etapa("Limite", Some(data(2024, 1, 9)), None, StatusEtapa::Pendente),
            // Um dia além da janela: fica de fora
            etapa("Depois", Some(data(2024, 1, 10)), None, StatusEtapa::Pendente),
            // Já vencida: não é "próxima do prazo"
            etapa("Vencida", Some(data(2024, 1, 5)), None, StatusEtapa::Atrasado),
        ];

        let alertas = proximas_do_prazo(&etapas, hoje, 3);
        let nomes: Vec<&str> = alertas.iter().map(|a| a.etapa.nome.as_str()).collect();
        assert_eq!(nomes, vec!["Hoje", "Limite"]);
        assert_eq!(alertas[0].dias, 0);
        assert_eq!(alertas[1].dias, 3);
    }

    #[test]
    fn etapa_concluida_nao_gera_alerta_de_prazo() {
        let hoje = data(2024, 1, 6);
        let etapas = vec![etapa(
            "Entregue",
            Some(data(2024, 1, 7)),
            Some(data(2024, 1, 5)),
            StatusEtapa::Concluido,
        )];
        assert!(proximas_do_prazo(&etapas, hoje, 3).is_empty());
    }

    #[test]
    fn em_atraso_conta_os_dias_desde_o_prazo() {
        let hoje = data(2024, 1, 10);
        let etapas = vec![
            etapa("A", Some(data(2024, 1, 6)), None, StatusEtapa::Atrasado),
            // Concluída com atraso não aparece nos alertas de atraso
            etapa(
                "B",
                Some(data(2024, 1, 5)),
                Some(data(2024, 1, 8)),
                StatusEtapa::ConcluidoAtraso,
            ),
        ];

        let alertas = em_atraso(&etapas, hoje);
        assert_eq!(alertas.len(), 1);
        assert_eq!(alertas[0].etapa.nome, "A");
        assert_eq!(alertas[0].dias, 4);
    }
}

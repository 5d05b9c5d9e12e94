// src/services/relatorio_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        etapa::{Etapa, StatusEtapa},
        relatorio::{AreaPercentual, RelatorioResumo, ResponsavelResumo},
    },
    services::{dashboard_service::DashboardService, indicadores},
};

#[derive(Clone)]
pub struct RelatorioService {
    dashboard_service: DashboardService,
}

impl RelatorioService {
    pub fn new(dashboard_service: DashboardService) -> Self {
        Self { dashboard_service }
    }

    pub async fn resumo(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
    ) -> Result<RelatorioResumo, AppError> {
        let etapas = self
            .dashboard_service
            .etapas_do_escopo(empresa_id, periodo_id, None)
            .await?;

        Ok(RelatorioResumo {
            indicadores: indicadores::resumir(&etapas),
            etapas_atrasadas: etapas_atrasadas(&etapas),
            por_area: areas_percentuais(&etapas),
            por_responsavel: responsaveis_resumo(&etapas),
        })
    }

    /// CSV ponto-e-vírgula com uma linha por etapa, no formato que a planilha
    /// de importação usa, com o rótulo de status localizado.
    pub async fn exportar_csv(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
        locale: &str,
    ) -> Result<String, AppError> {
        let etapas = self
            .dashboard_service
            .etapas_do_escopo(empresa_id, periodo_id, None)
            .await?;

        gerar_csv(&etapas, locale)
    }
}

// A aba "Atrasadas" lista tanto as em atraso quanto as entregues com atraso
fn etapas_atrasadas(etapas: &[Etapa]) -> Vec<Etapa> {
    etapas
        .iter()
        .filter(|e| {
            matches!(
                e.status,
                StatusEtapa::Atrasado | StatusEtapa::ConcluidoAtraso
            )
        })
        .cloned()
        .collect()
}

// Percentual de conclusão por área, na ordem da primeira ocorrência
fn areas_percentuais(etapas: &[Etapa]) -> Vec<AreaPercentual> {
    indicadores::por_area(etapas)
        .into_iter()
        .map(|resumo| {
            let total = resumo.concluidas + resumo.pendentes + resumo.atrasadas;
            let percentual = if total > 0 {
                ((resumo.concluidas as f64 / total as f64) * 100.0).round() as i64
            } else {
                0
            };
            AreaPercentual {
                area: resumo.area,
                total,
                concluidas: resumo.concluidas,
                percentual,
            }
        })
        .collect()
}

// Carga por responsável, ordenada por quem mais acumula atrasos
fn responsaveis_resumo(etapas: &[Etapa]) -> Vec<ResponsavelResumo> {
    let mut resumos: Vec<ResponsavelResumo> = indicadores::ranking_responsaveis(etapas, usize::MAX)
        .into_iter()
        .map(|entrada| {
            let percentual_atraso = if entrada.total > 0 {
                ((entrada.atrasadas as f64 / entrada.total as f64) * 100.0).round() as i64
            } else {
                0
            };
            ResponsavelResumo {
                nome: entrada.nome,
                total: entrada.total,
                atrasadas: entrada.atrasadas,
                percentual_atraso,
            }
        })
        .collect();

    resumos.sort_by(|a, b| b.atrasadas.cmp(&a.atrasadas));
    resumos
}

fn gerar_csv(etapas: &[Etapa], locale: &str) -> Result<String, AppError> {
    let cabecalho = if locale == "en" {
        ["D+", "Step", "Area", "Owner", "Planned Date", "Actual Date", "Status"]
    } else {
        ["D+", "Etapa", "Área", "Responsável", "Data Prevista", "Data Real", "Status"]
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer
        .write_record(cabecalho)
        .map_err(|e| anyhow::anyhow!("Falha ao gerar o CSV: {}", e))?;

    for etapa in etapas {
        writer
            .write_record([
                etapa.ordem.to_string(),
                etapa.nome.clone(),
                etapa.area.clone().unwrap_or_default(),
                etapa.responsavel.clone().unwrap_or_default(),
                etapa
                    .data_prevista
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                etapa.data_real.map(|d| d.to_string()).unwrap_or_default(),
                etapa.status.rotulo(locale).to_string(),
            ])
            .map_err(|e| anyhow::anyhow!("Falha ao gerar o CSV: {}", e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Falha ao finalizar o CSV: {}", e))?;

    String::from_utf8(bytes).map_err(|e| anyhow::anyhow!("CSV com UTF-8 inválido: {}", e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn etapa(
        nome: &str,
        area: Option<&str>,
        responsavel: Option<&str>,
        status: StatusEtapa,
    ) -> Etapa {
        let agora = Utc::now();
        Etapa {
            id: Uuid::new_v4(),
            periodo_id: Uuid::new_v4(),
            nome: nome.to_string(),
            area: area.map(str::to_string),
            responsavel: responsavel.map(str::to_string),
            ordem: 1,
            data_prevista: NaiveDate::from_ymd_opt(2024, 1, 5),
            data_real: None,
            status,
            criado_em: agora,
            atualizado_em: agora,
        }
    }

    #[test]
    fn atrasadas_incluem_concluidas_com_atraso() {
        let etapas = vec![
            etapa("A", None, None, StatusEtapa::Atrasado),
            etapa("B", None, None, StatusEtapa::ConcluidoAtraso),
            etapa("C", None, None, StatusEtapa::Concluido),
        ];
        let atrasadas = etapas_atrasadas(&etapas);
        assert_eq!(atrasadas.len(), 2);
        assert_eq!(atrasadas[0].nome, "A");
        assert_eq!(atrasadas[1].nome, "B");
    }

    #[test]
    fn percentual_por_area_arredonda_sobre_o_total_da_area() {
        let etapas = vec![
            etapa("A", Some("Fiscal"), None, StatusEtapa::Concluido),
            etapa("B", Some("Fiscal"), None, StatusEtapa::Pendente),
            etapa("C", Some("Fiscal"), None, StatusEtapa::Atrasado),
        ];
        let areas = areas_percentuais(&etapas);
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].total, 3);
        assert_eq!(areas[0].concluidas, 1);
        // 1/3 -> 33%
        assert_eq!(areas[0].percentual, 33);
    }

    #[test]
    fn responsaveis_ordenados_por_atrasos() {
        let etapas = vec![
            etapa("A", None, Some("Ana"), StatusEtapa::Concluido),
            etapa("B", None, Some("Bruno"), StatusEtapa::Atrasado),
            etapa("C", None, Some("Bruno"), StatusEtapa::ConcluidoAtraso),
            etapa("D", None, Some("Ana"), StatusEtapa::Pendente),
        ];
        let resumos = responsaveis_resumo(&etapas);
        assert_eq!(resumos[0].nome, "Bruno");
        assert_eq!(resumos[0].atrasadas, 2);
        assert_eq!(resumos[0].percentual_atraso, 100);
        assert_eq!(resumos[1].nome, "Ana");
        assert_eq!(resumos[1].percentual_atraso, 0);
    }

    #[test]
    fn csv_usa_ponto_e_virgula_e_rotulos_localizados() {
        let etapas = vec![etapa(
            "Conciliação",
            Some("Contábil"),
            Some("Maria"),
            StatusEtapa::Atrasado,
        )];

        let csv_pt = gerar_csv(&etapas, "pt").unwrap();
        let mut linhas = csv_pt.lines();
        assert_eq!(
            linhas.next().unwrap(),
            "D+;Etapa;Área;Responsável;Data Prevista;Data Real;Status"
        );
        assert_eq!(
            linhas.next().unwrap(),
            "1;Conciliação;Contábil;Maria;2024-01-05;;Atrasado"
        );

        let csv_en = gerar_csv(&etapas, "en").unwrap();
        assert!(csv_en.lines().nth(1).unwrap().ends_with(";Late"));
    }
}

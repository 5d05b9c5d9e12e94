// src/services/dashboard_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::EtapaRepository,
    models::{
        dashboard::{AreaResumo, DiaTimeline, Indicadores, ProgressoDia, RankingResponsavel},
        etapa::Etapa,
    },
    services::{indicadores, periodo_service::PeriodoService, status_engine},
};

// Quantos responsáveis o ranking do dashboard mostra por padrão
pub const TOP_RESPONSAVEIS: usize = 5;

#[derive(Clone)]
pub struct DashboardService {
    etapa_repo: EtapaRepository,
    periodo_service: PeriodoService,
}

impl DashboardService {
    pub fn new(etapa_repo: EtapaRepository, periodo_service: PeriodoService) -> Self {
        Self {
            etapa_repo,
            periodo_service,
        }
    }

    /// Materializa o escopo de um dashboard: as etapas de um período (ou de
    /// todos, quando `periodo_id` é None), com status rederivado para hoje e
    /// filtro opcional de área. Os agregadores puros recebem esta coleção.
    pub async fn etapas_do_escopo(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
        area: Option<&str>,
    ) -> Result<Vec<Etapa>, AppError> {
        let mut etapas = match periodo_id {
            Some(pid) => {
                self.periodo_service.buscar(empresa_id, pid).await?;
                self.etapa_repo.listar_por_periodo(pid).await?
            }
            None => self.etapa_repo.listar_por_empresa(empresa_id).await?,
        };

        status_engine::atualizar_colecao(&mut etapas, Utc::now().date_naive());

        if let Some(filtro) = area {
            // O filtro casa também com a sentinela "Sem área"
            etapas.retain(|e| indicadores::area_da(e) == filtro);
        }

        Ok(etapas)
    }

    pub async fn indicadores(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
        area: Option<&str>,
    ) -> Result<Indicadores, AppError> {
        let etapas = self.etapas_do_escopo(empresa_id, periodo_id, area).await?;
        Ok(indicadores::resumir(&etapas))
    }

    pub async fn por_area(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
        area: Option<&str>,
    ) -> Result<Vec<AreaResumo>, AppError> {
        let etapas = self.etapas_do_escopo(empresa_id, periodo_id, area).await?;
        Ok(indicadores::por_area(&etapas))
    }

    pub async fn ranking(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
        area: Option<&str>,
        top_n: usize,
    ) -> Result<Vec<RankingResponsavel>, AppError> {
        let etapas = self.etapas_do_escopo(empresa_id, periodo_id, area).await?;
        Ok(indicadores::ranking_responsaveis(&etapas, top_n))
    }

    pub async fn timeline(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
        area: Option<&str>,
    ) -> Result<Vec<DiaTimeline>, AppError> {
        let etapas = self.etapas_do_escopo(empresa_id, periodo_id, area).await?;
        Ok(indicadores::timeline(&etapas, indicadores::DIAS_TIMELINE))
    }

    pub async fn progresso(
        &self,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
        area: Option<&str>,
    ) -> Result<Vec<ProgressoDia>, AppError> {
        let etapas = self.etapas_do_escopo(empresa_id, periodo_id, area).await?;
        let timeline = indicadores::timeline(&etapas, indicadores::DIAS_TIMELINE);
        Ok(indicadores::progresso_acumulado(
            &timeline,
            etapas.len() as i64,
        ))
    }
}

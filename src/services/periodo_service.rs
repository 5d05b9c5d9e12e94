// src/services/periodo_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::PeriodoRepository, models::periodo::Periodo};

#[derive(Clone)]
pub struct PeriodoService {
    repo: PeriodoRepository,
}

impl PeriodoService {
    pub fn new(repo: PeriodoRepository) -> Self {
        Self { repo }
    }

    pub async fn criar(&self, empresa_id: Uuid, mes: i32, ano: i32) -> Result<Periodo, AppError> {
        self.repo.criar(empresa_id, mes, ano).await
    }

    pub async fn listar(&self, empresa_id: Uuid) -> Result<Vec<Periodo>, AppError> {
        self.repo.listar_por_empresa(empresa_id).await
    }

    /// Busca um período garantindo que pertence à empresa do contexto.
    pub async fn buscar(&self, empresa_id: Uuid, periodo_id: Uuid) -> Result<Periodo, AppError> {
        let periodo = self
            .repo
            .find_by_id(periodo_id)
            .await?
            .ok_or(AppError::PeriodoNotFound)?;

        if periodo.empresa_id != empresa_id {
            return Err(AppError::PeriodoNotFound);
        }

        Ok(periodo)
    }

    pub async fn atualizar_status(
        &self,
        empresa_id: Uuid,
        periodo_id: Uuid,
        status: &str,
    ) -> Result<Periodo, AppError> {
        self.buscar(empresa_id, periodo_id).await?;

        self.repo
            .atualizar_status(periodo_id, status)
            .await?
            .ok_or(AppError::PeriodoNotFound)
    }

    // Remove o período e, em cascata, todas as suas etapas
    pub async fn deletar(&self, empresa_id: Uuid, periodo_id: Uuid) -> Result<(), AppError> {
        self.buscar(empresa_id, periodo_id).await?;

        let removidos = self.repo.deletar(periodo_id).await?;
        if removidos == 0 {
            return Err(AppError::PeriodoNotFound);
        }

        Ok(())
    }
}

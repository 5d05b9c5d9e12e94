// src/services/historico_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError, db::HistoricoRepository, models::historico::RegistroHistorico,
};

#[derive(Clone)]
pub struct HistoricoService {
    repo: HistoricoRepository,
}

impl HistoricoService {
    pub fn new(repo: HistoricoRepository) -> Self {
        Self { repo }
    }

    pub async fn listar(&self, empresa_id: Uuid) -> Result<Vec<RegistroHistorico>, AppError> {
        self.repo.listar_por_empresa(empresa_id).await
    }
}

// src/services/cadastro_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CadastroRepository,
    models::cadastro::{Area, Responsavel},
};

#[derive(Clone)]
pub struct CadastroService {
    repo: CadastroRepository,
}

impl CadastroService {
    pub fn new(repo: CadastroRepository) -> Self {
        Self { repo }
    }

    pub async fn criar_area(&self, empresa_id: Uuid, nome: &str) -> Result<Area, AppError> {
        self.repo.criar_area(empresa_id, nome).await
    }

    pub async fn listar_areas(&self, empresa_id: Uuid) -> Result<Vec<Area>, AppError> {
        self.repo.listar_areas(empresa_id).await
    }

    pub async fn deletar_area(&self, empresa_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let removidas = self.repo.deletar_area(empresa_id, id).await?;
        if removidas == 0 {
            return Err(AppError::CadastroNotFound);
        }
        Ok(())
    }

    pub async fn criar_responsavel(
        &self,
        empresa_id: Uuid,
        nome: &str,
        email: Option<&str>,
    ) -> Result<Responsavel, AppError> {
        self.repo.criar_responsavel(empresa_id, nome, email).await
    }

    pub async fn listar_responsaveis(
        &self,
        empresa_id: Uuid,
    ) -> Result<Vec<Responsavel>, AppError> {
        self.repo.listar_responsaveis(empresa_id).await
    }

    pub async fn deletar_responsavel(&self, empresa_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let removidos = self.repo.deletar_responsavel(empresa_id, id).await?;
        if removidos == 0 {
            return Err(AppError::CadastroNotFound);
        }
        Ok(())
    }
}

// src/services/empresa_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::EmpresaRepository, models::empresa::Empresa};

#[derive(Clone)]
pub struct EmpresaService {
    repo: EmpresaRepository,
}

impl EmpresaService {
    pub fn new(repo: EmpresaRepository) -> Self {
        Self { repo }
    }

    pub async fn criar(
        &self,
        owner_id: Uuid,
        nome: &str,
        cnpj: Option<&str>,
    ) -> Result<Empresa, AppError> {
        self.repo.criar(owner_id, nome, cnpj).await
    }

    pub async fn listar(&self, owner_id: Uuid) -> Result<Vec<Empresa>, AppError> {
        self.repo.listar_por_owner(owner_id).await
    }

    /// Verificação de propriedade usada pelo empresa_guard e pelos demais
    /// serviços: a empresa precisa existir e pertencer ao usuário.
    pub async fn verificar_acesso(
        &self,
        empresa_id: Uuid,
        user_id: Uuid,
    ) -> Result<Empresa, AppError> {
        let empresa = self
            .repo
            .find_by_id(empresa_id)
            .await?
            .ok_or(AppError::EmpresaNotFound)?;

        if empresa.owner_id != user_id {
            return Err(AppError::AccessDenied);
        }

        Ok(empresa)
    }

    pub async fn atualizar(
        &self,
        empresa_id: Uuid,
        user_id: Uuid,
        nome: &str,
        cnpj: Option<&str>,
    ) -> Result<Empresa, AppError> {
        self.verificar_acesso(empresa_id, user_id).await?;

        self.repo
            .atualizar(empresa_id, nome, cnpj)
            .await?
            .ok_or(AppError::EmpresaNotFound)
    }

    pub async fn atualizar_notificacoes(
        &self,
        empresa_id: Uuid,
        user_id: Uuid,
        email_alerta: Option<&str>,
        alertas_email: Option<bool>,
        alertas_atraso: Option<bool>,
        dias_antecedencia: Option<i32>,
    ) -> Result<Empresa, AppError> {
        self.verificar_acesso(empresa_id, user_id).await?;

        self.repo
            .atualizar_notificacoes(
                empresa_id,
                email_alerta,
                alertas_email,
                alertas_atraso,
                dias_antecedencia,
            )
            .await?
            .ok_or(AppError::EmpresaNotFound)
    }

    // A exclusão cascateia para períodos, etapas e histórico no banco
    pub async fn deletar(&self, empresa_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.verificar_acesso(empresa_id, user_id).await?;

        let removidas = self.repo.deletar(empresa_id).await?;
        if removidas == 0 {
            return Err(AppError::EmpresaNotFound);
        }

        tracing::info!("Empresa {} removida pelo usuário {}", empresa_id, user_id);
        Ok(())
    }
}

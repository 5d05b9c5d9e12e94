// src/db/empresa_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::empresa::Empresa};

#[derive(Clone)]
pub struct EmpresaRepository {
    pool: PgPool,
}

impl EmpresaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(
        &self,
        owner_id: Uuid,
        nome: &str,
        cnpj: Option<&str>,
    ) -> Result<Empresa, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(
            r#"
            INSERT INTO empresas (owner_id, nome, cnpj)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(nome)
        .bind(cnpj)
        .fetch_one(&self.pool)
        .await?;

        Ok(empresa)
    }

    // Busca empresas onde o usuário é o dono
    pub async fn listar_por_owner(&self, owner_id: Uuid) -> Result<Vec<Empresa>, AppError> {
        let empresas = sqlx::query_as::<_, Empresa>(
            r#"
            SELECT * FROM empresas
            WHERE owner_id = $1
            ORDER BY criado_em ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(empresas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Empresa>, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>("SELECT * FROM empresas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(empresa)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        nome: &str,
        cnpj: Option<&str>,
    ) -> Result<Option<Empresa>, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(
            r#"
            UPDATE empresas
            SET nome = $2, cnpj = $3, atualizado_em = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(cnpj)
        .fetch_optional(&self.pool)
        .await?;

        Ok(empresa)
    }

    // Atualização parcial da configuração de alertas: campos nulos mantêm
    // o valor atual (COALESCE).
    pub async fn atualizar_notificacoes(
        &self,
        id: Uuid,
        email_alerta: Option<&str>,
        alertas_email: Option<bool>,
        alertas_atraso: Option<bool>,
        dias_antecedencia: Option<i32>,
    ) -> Result<Option<Empresa>, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(
            r#"
            UPDATE empresas
            SET email_alerta      = COALESCE($2, email_alerta),
                alertas_email     = COALESCE($3, alertas_email),
                alertas_atraso    = COALESCE($4, alertas_atraso),
                dias_antecedencia = COALESCE($5, dias_antecedencia),
                atualizado_em     = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(email_alerta)
        .bind(alertas_email)
        .bind(alertas_atraso)
        .bind(dias_antecedencia)
        .fetch_optional(&self.pool)
        .await?;

        Ok(empresa)
    }

    pub async fn deletar(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM empresas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// src/db/cadastro_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::cadastro::{Area, Responsavel},
};

// Repositório dos cadastros de apoio (áreas e responsáveis)
#[derive(Clone)]
pub struct CadastroRepository {
    pool: PgPool,
}

impl CadastroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- ÁREAS ---

    pub async fn criar_area(&self, empresa_id: Uuid, nome: &str) -> Result<Area, AppError> {
        let area = sqlx::query_as::<_, Area>(
            r#"
            INSERT INTO areas (empresa_id, nome)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(empresa_id)
        .bind(nome)
        .fetch_one(&self.pool)
        .await?;

        Ok(area)
    }

    pub async fn listar_areas(&self, empresa_id: Uuid) -> Result<Vec<Area>, AppError> {
        let areas = sqlx::query_as::<_, Area>(
            r#"
            SELECT * FROM areas
            WHERE empresa_id = $1
            ORDER BY nome ASC
            "#,
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(areas)
    }

    pub async fn deletar_area(&self, empresa_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM areas WHERE id = $1 AND empresa_id = $2")
            .bind(id)
            .bind(empresa_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // --- RESPONSÁVEIS ---

    pub async fn criar_responsavel(
        &self,
        empresa_id: Uuid,
        nome: &str,
        email: Option<&str>,
    ) -> Result<Responsavel, AppError> {
        let responsavel = sqlx::query_as::<_, Responsavel>(
            r#"
            INSERT INTO responsaveis (empresa_id, nome, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(empresa_id)
        .bind(nome)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(responsavel)
    }

    pub async fn listar_responsaveis(
        &self,
        empresa_id: Uuid,
    ) -> Result<Vec<Responsavel>, AppError> {
        let responsaveis = sqlx::query_as::<_, Responsavel>(
            r#"
            SELECT * FROM responsaveis
            WHERE empresa_id = $1
            ORDER BY nome ASC
            "#,
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(responsaveis)
    }

    pub async fn deletar_responsavel(&self, empresa_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM responsaveis WHERE id = $1 AND empresa_id = $2")
            .bind(id)
            .bind(empresa_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

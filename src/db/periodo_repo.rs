// src/db/periodo_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::periodo::Periodo};

#[derive(Clone)]
pub struct PeriodoRepository {
    pool: PgPool,
}

impl PeriodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, empresa_id: Uuid, mes: i32, ano: i32) -> Result<Periodo, AppError> {
        let periodo = sqlx::query_as::<_, Periodo>(
            r#"
            INSERT INTO periodos (empresa_id, mes, ano)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(empresa_id)
        .bind(mes)
        .bind(ano)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::PeriodoJaExiste;
                }
            }
            e.into()
        })?;

        Ok(periodo)
    }

    // Mais recentes primeiro, como o seletor de período do dashboard espera
    pub async fn listar_por_empresa(&self, empresa_id: Uuid) -> Result<Vec<Periodo>, AppError> {
        let periodos = sqlx::query_as::<_, Periodo>(
            r#"
            SELECT * FROM periodos
            WHERE empresa_id = $1
            ORDER BY ano DESC, mes DESC
            "#,
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(periodos)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Periodo>, AppError> {
        let periodo = sqlx::query_as::<_, Periodo>("SELECT * FROM periodos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(periodo)
    }

    pub async fn atualizar_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<Periodo>, AppError> {
        let periodo = sqlx::query_as::<_, Periodo>(
            r#"
            UPDATE periodos
            SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(periodo)
    }

    pub async fn deletar(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM periodos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

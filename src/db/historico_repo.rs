// src/db/historico_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::historico::RegistroHistorico};

// Trilha de auditoria: só insere e lista, nunca atualiza
#[derive(Clone)]
pub struct HistoricoRepository {
    pool: PgPool,
}

impl HistoricoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn registrar<'e, E>(
        &self,
        executor: E,
        empresa_id: Uuid,
        periodo_id: Option<Uuid>,
        etapa_nome: &str,
        acao: &str,
        usuario: &str,
        detalhes: Option<&str>,
    ) -> Result<RegistroHistorico, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let registro = sqlx::query_as::<_, RegistroHistorico>(
            r#"
            INSERT INTO historico (empresa_id, periodo_id, etapa_nome, acao, usuario, detalhes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(empresa_id)
        .bind(periodo_id)
        .bind(etapa_nome)
        .bind(acao)
        .bind(usuario)
        .bind(detalhes)
        .fetch_one(executor)
        .await?;

        Ok(registro)
    }

    pub async fn listar_por_empresa(
        &self,
        empresa_id: Uuid,
    ) -> Result<Vec<RegistroHistorico>, AppError> {
        let registros = sqlx::query_as::<_, RegistroHistorico>(
            r#"
            SELECT * FROM historico
            WHERE empresa_id = $1
            ORDER BY timestamp DESC
            "#,
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }
}

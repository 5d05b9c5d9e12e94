// src/db/etapa_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::etapa::{Etapa, StatusEtapa},
};

#[derive(Clone)]
pub struct EtapaRepository {
    pool: PgPool,
}

impl EtapaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Insere uma etapa com o status já derivado pelo motor de status.
    // Aceita um executor (pool ou transação) para que o serviço possa
    // gravar etapa + histórico atomicamente.
    #[allow(clippy::too_many_arguments)]
    pub async fn criar<'e, E>(
        &self,
        executor: E,
        periodo_id: Uuid,
        nome: &str,
        area: Option<&str>,
        responsavel: Option<&str>,
        ordem: i32,
        data_prevista: Option<NaiveDate>,
        data_real: Option<NaiveDate>,
        status: StatusEtapa,
    ) -> Result<Etapa, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let etapa = sqlx::query_as::<_, Etapa>(
            r#"
            INSERT INTO etapas
                (periodo_id, nome, area, responsavel, ordem, data_prevista, data_real, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(periodo_id)
        .bind(nome)
        .bind(area)
        .bind(responsavel)
        .bind(ordem)
        .bind(data_prevista)
        .bind(data_real)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(etapa)
    }

    // Ordenadas pela posição D+N; empates mantêm a ordem de criação
    pub async fn listar_por_periodo(&self, periodo_id: Uuid) -> Result<Vec<Etapa>, AppError> {
        let etapas = sqlx::query_as::<_, Etapa>(
            r#"
            SELECT * FROM etapas
            WHERE periodo_id = $1
            ORDER BY ordem ASC, criado_em ASC
            "#,
        )
        .bind(periodo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(etapas)
    }

    // Todas as etapas da empresa, cruzando todos os períodos
    // (opção "Todos os períodos" do dashboard)
    pub async fn listar_por_empresa(&self, empresa_id: Uuid) -> Result<Vec<Etapa>, AppError> {
        let etapas = sqlx::query_as::<_, Etapa>(
            r#"
            SELECT e.* FROM etapas e
            JOIN periodos p ON p.id = e.periodo_id
            WHERE p.empresa_id = $1
            ORDER BY e.ordem ASC, e.criado_em ASC
            "#,
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(etapas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Etapa>, AppError> {
        let etapa = sqlx::query_as::<_, Etapa>("SELECT * FROM etapas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(etapa)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn atualizar<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        area: Option<&str>,
        responsavel: Option<&str>,
        ordem: i32,
        data_prevista: Option<NaiveDate>,
        data_real: Option<NaiveDate>,
        status: StatusEtapa,
    ) -> Result<Option<Etapa>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let etapa = sqlx::query_as::<_, Etapa>(
            r#"
            UPDATE etapas
            SET nome = $2,
                area = $3,
                responsavel = $4,
                ordem = $5,
                data_prevista = $6,
                data_real = $7,
                status = $8,
                atualizado_em = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(area)
        .bind(responsavel)
        .bind(ordem)
        .bind(data_prevista)
        .bind(data_real)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(etapa)
    }

    pub async fn deletar<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM etapas WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

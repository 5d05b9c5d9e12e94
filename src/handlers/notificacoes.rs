// src/handlers/notificacoes.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::empresa::EmpresaContext,
    models::notificacao::Alertas,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltroAlertas {
    pub periodo_id: Option<Uuid>,
}

// GET /api/notificacoes/alertas
#[utoipa::path(
    get,
    path = "/api/notificacoes/alertas",
    tag = "Notificacoes",
    responses(
        (status = 200, description = "Etapas próximas do prazo e em atraso", body = Alertas)
    ),
    params(
        ("periodoId" = Option<Uuid>, Query, description = "ID do Período (ausente = todos)"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn alertas(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Query(filtro): Query<FiltroAlertas>,
) -> Result<impl IntoResponse, AppError> {
    let alertas = app_state
        .notificacao_service
        .alertas(empresa.0, filtro.periodo_id)
        .await?;

    Ok(Json(alertas))
}

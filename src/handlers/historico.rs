// src/handlers/historico.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::empresa::EmpresaContext,
    models::historico::RegistroHistorico,
};

// GET /api/historico
#[utoipa::path(
    get,
    path = "/api/historico",
    tag = "Historico",
    responses(
        (status = 200, description = "Trilha de auditoria da empresa, mais recente primeiro", body = Vec<RegistroHistorico>)
    ),
    params(
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state.historico_service.listar(empresa.0).await?;
    Ok(Json(registros))
}

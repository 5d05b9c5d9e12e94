// src/handlers/periodos.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::empresa::EmpresaContext,
    models::periodo::Periodo,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeriodoPayload {
    #[validate(range(min = 1, max = 12, message = "O mês deve estar entre 1 e 12."))]
    #[schema(example = 1)]
    pub mes: i32,

    #[validate(range(min = 2000, max = 2100, message = "O ano deve estar entre 2000 e 2100."))]
    #[schema(example = 2024)]
    pub ano: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePeriodoStatusPayload {
    #[validate(length(min = 1, message = "O status é obrigatório."))]
    #[schema(example = "fechado")]
    pub status: String,
}

// POST /api/periodos
#[utoipa::path(
    post,
    path = "/api/periodos",
    tag = "Periodos",
    request_body = CreatePeriodoPayload,
    responses(
        (status = 201, description = "Período criado aberto", body = Periodo),
        (status = 409, description = "Mês/ano já cadastrado")
    ),
    params(
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar_periodo(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Json(payload): Json<CreatePeriodoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let periodo = app_state
        .periodo_service
        .criar(empresa.0, payload.mes, payload.ano)
        .await?;

    Ok((StatusCode::CREATED, Json(periodo)))
}

// GET /api/periodos
#[utoipa::path(
    get,
    path = "/api/periodos",
    tag = "Periodos",
    responses(
        (status = 200, description = "Períodos da empresa, mais recentes primeiro", body = Vec<Periodo>)
    ),
    params(
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_periodos(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
) -> Result<impl IntoResponse, AppError> {
    let periodos = app_state.periodo_service.listar(empresa.0).await?;
    Ok(Json(periodos))
}

// PUT /api/periodos/{periodo_id}
#[utoipa::path(
    put,
    path = "/api/periodos/{periodo_id}",
    tag = "Periodos",
    request_body = UpdatePeriodoStatusPayload,
    responses(
        (status = 200, description = "Status do período atualizado", body = Periodo),
        (status = 404, description = "Período não encontrado")
    ),
    params(
        ("periodo_id" = Uuid, Path, description = "ID do Período"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar_periodo(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePeriodoStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let periodo = app_state
        .periodo_service
        .atualizar_status(empresa.0, id, &payload.status)
        .await?;

    Ok(Json(periodo))
}

// DELETE /api/periodos/{periodo_id}
#[utoipa::path(
    delete,
    path = "/api/periodos/{periodo_id}",
    tag = "Periodos",
    responses(
        (status = 204, description = "Período removido com as suas etapas"),
        (status = 404, description = "Período não encontrado")
    ),
    params(
        ("periodo_id" = Uuid, Path, description = "ID do Período"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn deletar_periodo(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.periodo_service.deletar(empresa.0, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

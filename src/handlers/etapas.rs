// src/handlers/etapas.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, empresa::EmpresaContext},
    models::etapa::Etapa,
};

// Payload de criação e de edição de etapa. O status nunca entra aqui:
// é derivado no servidor a partir das datas.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EtapaPayload {
    #[validate(length(min = 1, message = "O nome da etapa é obrigatório."))]
    #[schema(example = "Conciliação bancária")]
    pub nome: String,

    #[schema(example = "Contabilidade")]
    pub area: Option<String>,

    #[schema(example = "Maria Silva")]
    pub responsavel: Option<String>,

    #[validate(range(min = 0, message = "A ordem (D+N) não pode ser negativa."))]
    #[serde(default)]
    #[schema(example = 2)]
    pub ordem: i32,

    pub data_prevista: Option<NaiveDate>,
    pub data_real: Option<NaiveDate>,
}

// POST /api/periodos/{periodo_id}/etapas
#[utoipa::path(
    post,
    path = "/api/periodos/{periodo_id}/etapas",
    tag = "Etapas",
    request_body = EtapaPayload,
    responses(
        (status = 201, description = "Etapa criada com status derivado", body = Etapa),
        (status = 404, description = "Período não encontrado")
    ),
    params(
        ("periodo_id" = Uuid, Path, description = "ID do Período"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar_etapa(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    empresa: EmpresaContext,
    Path(periodo_id): Path<Uuid>,
    Json(payload): Json<EtapaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let etapa = app_state
        .etapa_service
        .criar(
            empresa.0,
            periodo_id,
            &user.0.email,
            &payload.nome,
            payload.area.as_deref(),
            payload.responsavel.as_deref(),
            payload.ordem,
            payload.data_prevista,
            payload.data_real,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(etapa)))
}

// GET /api/periodos/{periodo_id}/etapas
#[utoipa::path(
    get,
    path = "/api/periodos/{periodo_id}/etapas",
    tag = "Etapas",
    responses(
        (status = 200, description = "Etapas do período ordenadas por D+N, status rederivado para hoje", body = Vec<Etapa>),
        (status = 404, description = "Período não encontrado")
    ),
    params(
        ("periodo_id" = Uuid, Path, description = "ID do Período"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_etapas(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Path(periodo_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let etapas = app_state.etapa_service.listar(empresa.0, periodo_id).await?;
    Ok(Json(etapas))
}

// PUT /api/periodos/{periodo_id}/etapas/{etapa_id}
#[utoipa::path(
    put,
    path = "/api/periodos/{periodo_id}/etapas/{etapa_id}",
    tag = "Etapas",
    request_body = EtapaPayload,
    responses(
        (status = 200, description = "Etapa atualizada com status rederivado", body = Etapa),
        (status = 404, description = "Período ou etapa não encontrados")
    ),
    params(
        ("periodo_id" = Uuid, Path, description = "ID do Período"),
        ("etapa_id" = Uuid, Path, description = "ID da Etapa"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar_etapa(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    empresa: EmpresaContext,
    Path((periodo_id, etapa_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<EtapaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let etapa = app_state
        .etapa_service
        .atualizar(
            empresa.0,
            periodo_id,
            etapa_id,
            &user.0.email,
            &payload.nome,
            payload.area.as_deref(),
            payload.responsavel.as_deref(),
            payload.ordem,
            payload.data_prevista,
            payload.data_real,
        )
        .await?;

    Ok(Json(etapa))
}

// DELETE /api/periodos/{periodo_id}/etapas/{etapa_id}
#[utoipa::path(
    delete,
    path = "/api/periodos/{periodo_id}/etapas/{etapa_id}",
    tag = "Etapas",
    responses(
        (status = 204, description = "Etapa removida de todas as agregações"),
        (status = 404, description = "Período ou etapa não encontrados")
    ),
    params(
        ("periodo_id" = Uuid, Path, description = "ID do Período"),
        ("etapa_id" = Uuid, Path, description = "ID da Etapa"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn deletar_etapa(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    empresa: EmpresaContext,
    Path((periodo_id, etapa_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .etapa_service
        .deletar(empresa.0, periodo_id, etapa_id, &user.0.email)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

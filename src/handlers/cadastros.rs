// src/handlers/cadastros.rs

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
    models::cadastro::{Area, Responsavel},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAreaPayload {
    #[validate(length(min = 1, message = "O nome da área é obrigatório."))]
    #[schema(example = "Fiscal")]
    pub nome: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponsavelPayload {
    #[validate(length(min = 1, message = "O nome do responsável é obrigatório."))]
    #[schema(example = "Maria Silva")]
    pub nome: String,

    #[validate(email(message = "O e-mail do responsável é inválido."))]
    pub email: Option<String>,
}

// --- ÁREAS ---

// POST /api/cadastros/areas
#[utoipa::path(
    post,
    path = "/api/cadastros/areas",
    tag = "Cadastros",
    request_body = CreateAreaPayload,
    responses(
        (status = 201, description = "Área criada", body = Area)
    ),
    params(
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar_area(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Json(payload): Json<CreateAreaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let area = app_state
        .cadastro_service
        .criar_area(empresa.0, &payload.nome)
        .await?;

    Ok((StatusCode::CREATED, Json(area)))
}

// GET /api/cadastros/areas
#[utoipa::path(
    get,
    path = "/api/cadastros/areas",
    tag = "Cadastros",
    responses(
        (status = 200, description = "Áreas da empresa", body = Vec<Area>)
    ),
    params(
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_areas(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
) -> Result<impl IntoResponse, AppError> {
    let areas = app_state.cadastro_service.listar_areas(empresa.0).await?;
    Ok(Json(areas))
}

// DELETE /api/cadastros/areas/{id}
#[utoipa::path(
    delete,
    path = "/api/cadastros/areas/{id}",
    tag = "Cadastros",
    responses(
        (status = 204, description = "Área removida; etapas existentes mantêm o rótulo"),
        (status = 404, description = "Área não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da Área"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn deletar_area(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.deletar_area(empresa.0, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- RESPONSÁVEIS ---

// POST /api/cadastros/responsaveis
#[utoipa::path(
    post,
    path = "/api/cadastros/responsaveis",
    tag = "Cadastros",
    request_body = CreateResponsavelPayload,
    responses(
        (status = 201, description = "Responsável criado", body = Responsavel)
    ),
    params(
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar_responsavel(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Json(payload): Json<CreateResponsavelPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let responsavel = app_state
        .cadastro_service
        .criar_responsavel(empresa.0, &payload.nome, payload.email.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(responsavel)))
}

// GET /api/cadastros/responsaveis
#[utoipa::path(
    get,
    path = "/api/cadastros/responsaveis",
    tag = "Cadastros",
    responses(
        (status = 200, description = "Responsáveis da empresa", body = Vec<Responsavel>)
    ),
    params(
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_responsaveis(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
) -> Result<impl IntoResponse, AppError> {
    let responsaveis = app_state
        .cadastro_service
        .listar_responsaveis(empresa.0)
        .await?;
    Ok(Json(responsaveis))
}

// DELETE /api/cadastros/responsaveis/{id}
#[utoipa::path(
    delete,
    path = "/api/cadastros/responsaveis/{id}",
    tag = "Cadastros",
    responses(
        (status = 204, description = "Responsável removido; etapas existentes mantêm o rótulo"),
        (status = 404, description = "Responsável não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do Responsável"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn deletar_responsavel(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .cadastro_service
        .deletar_responsavel(empresa.0, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

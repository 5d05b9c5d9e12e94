// src/handlers/empresas.rs

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
    middleware::auth::AuthenticatedUser,
    models::{empresa::Empresa, notificacao::ConfigNotificacoesPayload},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpresaPayload {
    #[validate(length(min = 1, message = "O nome da empresa é obrigatório."))]
    #[schema(example = "Acme Contabilidade Ltda")]
    pub nome: String,

    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: Option<String>,
}

// POST /api/empresas
#[utoipa::path(
    post,
    path = "/api/empresas",
    tag = "Empresas",
    request_body = EmpresaPayload,
    responses(
        (status = 201, description = "Empresa criada", body = Empresa)
    ),
    security(("api_jwt" = []))
)]
pub async fn criar_empresa(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<EmpresaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let empresa = app_state
        .empresa_service
        .criar(user.0.id, &payload.nome, payload.cnpj.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(empresa)))
}

// GET /api/empresas
#[utoipa::path(
    get,
    path = "/api/empresas",
    tag = "Empresas",
    responses(
        (status = 200, description = "Empresas do usuário autenticado", body = Vec<Empresa>)
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_empresas(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let empresas = app_state.empresa_service.listar(user.0.id).await?;
    Ok(Json(empresas))
}

// PUT /api/empresas/{id}
#[utoipa::path(
    put,
    path = "/api/empresas/{id}",
    tag = "Empresas",
    request_body = EmpresaPayload,
    responses(
        (status = 200, description = "Empresa atualizada", body = Empresa),
        (status = 403, description = "Empresa de outro usuário"),
        (status = 404, description = "Empresa não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar_empresa(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EmpresaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let empresa = app_state
        .empresa_service
        .atualizar(id, user.0.id, &payload.nome, payload.cnpj.as_deref())
        .await?;

    Ok(Json(empresa))
}

// PUT /api/empresas/{id}/notificacoes
#[utoipa::path(
    put,
    path = "/api/empresas/{id}/notificacoes",
    tag = "Empresas",
    request_body = ConfigNotificacoesPayload,
    responses(
        (status = 200, description = "Configuração de alertas atualizada", body = Empresa)
    ),
    params(
        ("id" = Uuid, Path, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar_notificacoes(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ConfigNotificacoesPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let empresa = app_state
        .empresa_service
        .atualizar_notificacoes(
            id,
            user.0.id,
            payload.email_alerta.as_deref(),
            payload.alertas_email,
            payload.alertas_atraso,
            payload.dias_antecedencia,
        )
        .await?;

    Ok(Json(empresa))
}

// DELETE /api/empresas/{id}
#[utoipa::path(
    delete,
    path = "/api/empresas/{id}",
    tag = "Empresas",
    responses(
        (status = 204, description = "Empresa removida com períodos e etapas"),
        (status = 404, description = "Empresa não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn deletar_empresa(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.empresa_service.deletar(id, user.0.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

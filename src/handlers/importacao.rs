// src/handlers/importacao.rs

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
    middleware::{auth::AuthenticatedUser, empresa::EmpresaContext},
    models::importacao::{LinhaImportacao, ResultadoImportacao},
};

// A leitura da planilha (XLSX/CSV) acontece no cliente; o backend recebe
// as linhas já extraídas e aplica validação e derivação de status.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportarEtapasPayload {
    #[validate(length(min = 1, message = "A importação precisa de pelo menos uma linha."))]
    pub linhas: Vec<LinhaImportacao>,
}

// POST /api/periodos/{periodo_id}/etapas/importar
#[utoipa::path(
    post,
    path = "/api/periodos/{periodo_id}/etapas/importar",
    tag = "Importacao",
    request_body = ImportarEtapasPayload,
    responses(
        (status = 200, description = "Linhas válidas importadas; erros listados por linha", body = ResultadoImportacao),
        (status = 404, description = "Período não encontrado")
    ),
    params(
        ("periodo_id" = Uuid, Path, description = "ID do Período"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn importar_etapas(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    empresa: EmpresaContext,
    Path(periodo_id): Path<Uuid>,
    Json(payload): Json<ImportarEtapasPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let resultado = app_state
        .etapa_service
        .importar(empresa.0, periodo_id, &user.0.email, &payload.linhas)
        .await?;

    Ok((StatusCode::OK, Json(resultado)))
}

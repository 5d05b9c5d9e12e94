// src/handlers/relatorios.rs

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{empresa::EmpresaContext, i18n::Locale},
    models::relatorio::RelatorioResumo,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltroRelatorio {
    pub periodo_id: Option<Uuid>,
}

// GET /api/relatorios/resumo
#[utoipa::path(
    get,
    path = "/api/relatorios/resumo",
    tag = "Relatorios",
    responses(
        (status = 200, description = "Relatório gerencial do fechamento", body = RelatorioResumo)
    ),
    params(
        ("periodoId" = Option<Uuid>, Query, description = "ID do Período (ausente = todos)"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn resumo(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Query(filtro): Query<FiltroRelatorio>,
) -> Result<impl IntoResponse, AppError> {
    let relatorio = app_state
        .relatorio_service
        .resumo(empresa.0, filtro.periodo_id)
        .await?;

    Ok(Json(relatorio))
}

// GET /api/relatorios/exportar
#[utoipa::path(
    get,
    path = "/api/relatorios/exportar",
    tag = "Relatorios",
    responses(
        (status = 200, description = "CSV ponto-e-vírgula com as etapas do período",
            body = String, content_type = "text/csv")
    ),
    params(
        ("periodoId" = Option<Uuid>, Query, description = "ID do Período (ausente = todos)"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn exportar(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    locale: Locale,
    Query(filtro): Query<FiltroRelatorio>,
) -> Result<impl IntoResponse, AppError> {
    let csv = app_state
        .relatorio_service
        .exportar_csv(empresa.0, filtro.periodo_id, &locale.0)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"relatorio_fechamento.csv\"",
            ),
        ],
        csv,
    ))
}

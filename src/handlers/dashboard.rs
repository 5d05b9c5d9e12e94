// src/handlers/dashboard.rs

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
    models::dashboard::{AreaResumo, DiaTimeline, Indicadores, ProgressoDia, RankingResponsavel},
    services::dashboard_service::TOP_RESPONSAVEIS,
};

// Filtros comuns a todos os painéis: período (ausente = todos os períodos
// da empresa) e área (inclusive a sentinela "Sem área").
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltroDashboard {
    pub periodo_id: Option<Uuid>,
    pub area: Option<String>,
    // Usado apenas pelo ranking de responsáveis
    pub top: Option<usize>,
}

// GET /api/dashboard/indicadores
#[utoipa::path(
    get,
    path = "/api/dashboard/indicadores",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Indicadores do fechamento", body = Indicadores)
    ),
    params(
        ("periodoId" = Option<Uuid>, Query, description = "ID do Período (ausente = todos)"),
        ("area" = Option<String>, Query, description = "Filtro de área"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn indicadores(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Query(filtro): Query<FiltroDashboard>,
) -> Result<impl IntoResponse, AppError> {
    let indicadores = app_state
        .dashboard_service
        .indicadores(empresa.0, filtro.periodo_id, filtro.area.as_deref())
        .await?;

    Ok(Json(indicadores))
}

// GET /api/dashboard/por-area
#[utoipa::path(
    get,
    path = "/api/dashboard/por-area",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Etapas agrupadas por área", body = Vec<AreaResumo>)
    ),
    params(
        ("periodoId" = Option<Uuid>, Query, description = "ID do Período (ausente = todos)"),
        ("area" = Option<String>, Query, description = "Filtro de área"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn por_area(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Query(filtro): Query<FiltroDashboard>,
) -> Result<impl IntoResponse, AppError> {
    let resumos = app_state
        .dashboard_service
        .por_area(empresa.0, filtro.periodo_id, filtro.area.as_deref())
        .await?;

    Ok(Json(resumos))
}

// GET /api/dashboard/ranking
#[utoipa::path(
    get,
    path = "/api/dashboard/ranking",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Top responsáveis por volume de etapas", body = Vec<RankingResponsavel>)
    ),
    params(
        ("periodoId" = Option<Uuid>, Query, description = "ID do Período (ausente = todos)"),
        ("area" = Option<String>, Query, description = "Filtro de área"),
        ("top" = Option<usize>, Query, description = "Tamanho do ranking (padrão 5)"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn ranking(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Query(filtro): Query<FiltroDashboard>,
) -> Result<impl IntoResponse, AppError> {
    let ranking = app_state
        .dashboard_service
        .ranking(
            empresa.0,
            filtro.periodo_id,
            filtro.area.as_deref(),
            filtro.top.unwrap_or(TOP_RESPONSAVEIS),
        )
        .await?;

    Ok(Json(ranking))
}

// GET /api/dashboard/timeline
#[utoipa::path(
    get,
    path = "/api/dashboard/timeline",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Baldes D+0 a D+10 do fechamento", body = Vec<DiaTimeline>)
    ),
    params(
        ("periodoId" = Option<Uuid>, Query, description = "ID do Período (ausente = todos)"),
        ("area" = Option<String>, Query, description = "Filtro de área"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn timeline(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Query(filtro): Query<FiltroDashboard>,
) -> Result<impl IntoResponse, AppError> {
    let timeline = app_state
        .dashboard_service
        .timeline(empresa.0, filtro.periodo_id, filtro.area.as_deref())
        .await?;

    Ok(Json(timeline))
}

// GET /api/dashboard/progresso
#[utoipa::path(
    get,
    path = "/api/dashboard/progresso",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Progresso acumulado vs meta linear", body = Vec<ProgressoDia>)
    ),
    params(
        ("periodoId" = Option<Uuid>, Query, description = "ID do Período (ausente = todos)"),
        ("area" = Option<String>, Query, description = "Filtro de área"),
        ("x-empresa-id" = Uuid, Header, description = "ID da Empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn progresso(
    State(app_state): State<AppState>,
    empresa: EmpresaContext,
    Query(filtro): Query<FiltroDashboard>,
) -> Result<impl IntoResponse, AppError> {
    let progresso = app_state
        .dashboard_service
        .progresso(empresa.0, filtro.periodo_id, filtro.area.as_deref())
        .await?;

    Ok(Json(progresso))
}

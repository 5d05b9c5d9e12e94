// src/models/relatorio.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::dashboard::Indicadores;
use crate::models::etapa::Etapa;

// Percentual de conclusão de uma área (aba "Por Área" do relatório)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaPercentual {
    pub area: String,
    pub total: i64,
    pub concluidas: i64,
    pub percentual: i64,
}

// Carga de trabalho por responsável (aba "Responsáveis")
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponsavelResumo {
    pub nome: String,
    pub total: i64,
    pub atrasadas: i64,
    pub percentual_atraso: i64,
}

// Relatório gerencial completo de um período
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioResumo {
    pub indicadores: Indicadores,
    // Atrasadas e concluídas com atraso, para a aba "Atrasadas"
    pub etapas_atrasadas: Vec<Etapa>,
    pub por_area: Vec<AreaPercentual>,
    pub por_responsavel: Vec<ResponsavelResumo>,
}

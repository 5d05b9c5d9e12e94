// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// 1. Indicadores do fechamento (os cards do topo do dashboard).
// Derivados sob demanda a partir da coleção de etapas; nunca persistidos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Indicadores {
    pub total: i64,
    pub concluidas: i64,
    pub em_andamento: i64,
    pub pendentes: i64,
    pub atrasadas: i64,
    pub concluidas_com_atraso: i64,
    // Arredondamentos independentes: não somam necessariamente 100
    pub percentual_concluido: i64,
    pub percentual_atrasado: i64,
    // Média (em dias) dos atrasos positivos entre as concluídas com atraso
    pub tempo_medio_atraso: i64,
}

// 2. Etapas por área (gráfico de barras empilhadas)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaResumo {
    pub area: String,
    pub concluidas: i64,
    pub pendentes: i64,
    pub atrasadas: i64,
}

// 3. Ranking de responsáveis (top N por volume de etapas)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponsavel {
    pub nome: String,
    pub total: i64,
    pub concluidas: i64,
    // Conta 'atrasado' e 'concluido_atraso'
    pub atrasadas: i64,
}

// 4. Linha do tempo D+0..D+N do fechamento
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaTimeline {
    #[schema(example = "D+3")]
    pub dia: String,
    pub total: i64,
    pub concluidas: i64,
    pub pendentes: i64,
}

// 5. Progresso acumulado vs meta linear (gráfico de área)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressoDia {
    #[schema(example = "D+3")]
    pub dia: String,
    pub progresso: i64,
    pub meta: i64,
}

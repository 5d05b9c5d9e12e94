// src/models/periodo.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// ---
// Período (o mês/ano que escopa um conjunto de etapas)
// ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Periodo {
    pub id: Uuid,
    #[schema(ignore)]
    pub empresa_id: Uuid,
    #[schema(example = 1)]
    pub mes: i32,
    #[schema(example = 2024)]
    pub ano: i32,
    // 'aberto' na criação; fechado manualmente pelo usuário
    #[schema(example = "aberto")]
    pub status: String,
    pub criado_em: DateTime<Utc>,
}

// src/models/historico.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Registro append-only da trilha de auditoria das etapas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistroHistorico {
    pub id: Uuid,
    #[schema(ignore)]
    pub empresa_id: Uuid,
    pub periodo_id: Option<Uuid>,
    #[schema(example = "Conciliação bancária")]
    pub etapa_nome: String,
    #[schema(example = "atualizada")]
    pub acao: String,
    #[schema(example = "maria@acme.com")]
    pub usuario: String,
    pub detalhes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

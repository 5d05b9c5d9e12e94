// src/models/empresa.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// ---
// Empresa (a conta principal que agrupa períodos e etapas)
// ---
// Visível apenas para o seu dono. Os campos de alerta alimentam a página
// de notificações; o envio de e-mail em si fica fora do backend.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Empresa {
    pub id: Uuid,
    #[schema(ignore)]
    pub owner_id: Uuid,
    #[schema(example = "Acme Contabilidade Ltda")]
    pub nome: String,
    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: Option<String>,
    pub email_alerta: Option<String>,
    pub alertas_email: bool,
    pub alertas_atraso: bool,
    #[schema(example = 3)]
    pub dias_antecedencia: i32,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

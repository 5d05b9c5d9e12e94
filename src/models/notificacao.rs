// src/models/notificacao.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::etapa::Etapa;

// Uma etapa que disparou um alerta, com a distância (em dias) até o prazo
// ou desde o vencimento.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EtapaAlerta {
    #[serde(flatten)]
    pub etapa: Etapa,
    #[schema(example = 2)]
    pub dias: i64,
}

// Resposta da aba "Alertas Pendentes"
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alertas {
    // Etapas sem data real que vencem nos próximos N dias
    pub proximas_prazo: Vec<EtapaAlerta>,
    // Etapas com status 'atrasado'
    pub atrasadas: Vec<EtapaAlerta>,
    pub dias_antecedencia: i32,
}

// Configuração de alertas da empresa (aba "Configurações")
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigNotificacoesPayload {
    #[validate(email(message = "O e-mail de alerta é inválido."))]
    pub email_alerta: Option<String>,
    pub alertas_email: Option<bool>,
    pub alertas_atraso: Option<bool>,
    #[validate(range(min = 0, max = 30, message = "A antecedência deve estar entre 0 e 30 dias."))]
    pub dias_antecedencia: Option<i32>,
}

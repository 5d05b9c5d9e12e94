// src/models/etapa.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// ---
// Status derivado de uma etapa
// ---
// Campo calculado pelo motor de status, nunca definido diretamente pelo
// cliente. A conclusão antecipada conta como 'concluido' (regra canônica,
// ver DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_etapa", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusEtapa {
    Pendente,
    EmAndamento,
    Atrasado,
    Concluido,
    ConcluidoAtraso,
}

impl StatusEtapa {
    /// Etapa entregue (no prazo ou com atraso).
    pub fn concluida(self) -> bool {
        matches!(self, StatusEtapa::Concluido | StatusEtapa::ConcluidoAtraso)
    }

    /// Rótulo de exibição, localizado pelo cabeçalho Accept-Language.
    pub fn rotulo(self, locale: &str) -> &'static str {
        if locale == "en" {
            match self {
                StatusEtapa::Pendente => "Pending",
                StatusEtapa::EmAndamento => "In Progress",
                StatusEtapa::Atrasado => "Late",
                StatusEtapa::Concluido => "Completed",
                StatusEtapa::ConcluidoAtraso => "Completed Late",
            }
        } else {
            match self {
                StatusEtapa::Pendente => "Pendente",
                StatusEtapa::EmAndamento => "Em Andamento",
                StatusEtapa::Atrasado => "Atrasado",
                StatusEtapa::Concluido => "Concluído",
                StatusEtapa::ConcluidoAtraso => "Concluído c/ Atraso",
            }
        }
    }
}

// ---
// Etapa ("a unidade de trabalho do fechamento")
// ---
// Pertence a exatamente um período. As datas são DATE puras (sem hora);
// `ordem` é a posição D+N na linha do tempo do fechamento.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Etapa {
    pub id: Uuid,
    #[schema(ignore)]
    pub periodo_id: Uuid,
    #[schema(example = "Conciliação bancária")]
    pub nome: String,
    #[schema(example = "Contabilidade")]
    pub area: Option<String>,
    #[schema(example = "Maria Silva")]
    pub responsavel: Option<String>,
    #[schema(example = 2)]
    pub ordem: i32,
    pub data_prevista: Option<NaiveDate>,
    pub data_real: Option<NaiveDate>,
    pub status: StatusEtapa,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

// src/models/importacao.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Uma linha de planilha já convertida em JSON pelo cliente.
// O backend não lê arquivos: recebe as linhas extraídas e aplica as regras
// de validação e derivação de status no servidor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinhaImportacao {
    #[schema(example = "Apuração de impostos")]
    pub nome: Option<String>,
    pub area: Option<String>,
    pub responsavel: Option<String>,
    // Posição D+N; ausente vira a posição da linha na planilha
    pub ordem: Option<i32>,
    // Datas em ISO (YYYY-MM-DD); valores inválidos degradam para "sem data"
    #[schema(example = "2024-01-05")]
    pub data_prevista: Option<String>,
    #[schema(example = "2024-01-06")]
    pub data_real: Option<String>,
}

// Resultado da importação em massa
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoImportacao {
    pub importadas: i64,
    // Mensagens por linha rejeitada; as demais linhas são importadas
    pub erros: Vec<String>,
}

// src/middleware/empresa.rs

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use uuid::Uuid;

use crate::common::error::AppError;

// O nome do nosso cabeçalho HTTP customizado
pub const EMPRESA_ID_HEADER: &str = "x-empresa-id";

// O extrator do contexto de empresa.
// Ele armazena o UUID da empresa que o usuário quer acessar; a verificação
// de propriedade acontece no empresa_guard.
#[derive(Debug, Clone)]
pub struct EmpresaContext(pub Uuid);

/// Lê e valida o cabeçalho x-empresa-id de um conjunto de headers.
pub fn empresa_do_header(headers: &HeaderMap) -> Result<Uuid, AppError> {
    let value_str = headers
        .get(EMPRESA_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::EmpresaHeaderInvalido)?;

    Uuid::parse_str(value_str).map_err(|_| AppError::EmpresaHeaderInvalido)
}

impl<S> FromRequestParts<S> for EmpresaContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        empresa_do_header(&parts.headers).map(EmpresaContext)
    }
}

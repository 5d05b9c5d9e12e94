use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Empresa não encontrada")]
    EmpresaNotFound,

    #[error("Período não encontrado")]
    PeriodoNotFound,

    #[error("Período já cadastrado")]
    PeriodoJaExiste,

    #[error("Etapa não encontrada")]
    EtapaNotFound,

    #[error("Cadastro não encontrado")]
    CadastroNotFound,

    #[error("Cabeçalho x-empresa-id ausente ou inválido")]
    EmpresaHeaderInvalido,

    #[error("Acesso negado à empresa")]
    AccessDenied,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "Este e-mail já está em uso."),
            AppError::PeriodoJaExiste => (
                StatusCode::CONFLICT,
                "Já existe um período com este mês/ano nesta empresa.",
            ),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos."),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.",
            ),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado."),
            AppError::EmpresaNotFound => (StatusCode::NOT_FOUND, "Empresa não encontrada."),
            AppError::PeriodoNotFound => (StatusCode::NOT_FOUND, "Período não encontrado."),
            AppError::EtapaNotFound => (StatusCode::NOT_FOUND, "Etapa não encontrada."),
            AppError::CadastroNotFound => (StatusCode::NOT_FOUND, "Cadastro não encontrado."),
            AppError::EmpresaHeaderInvalido => (
                StatusCode::BAD_REQUEST,
                "O cabeçalho x-empresa-id é obrigatório e deve ser um UUID.",
            ),
            AppError::AccessDenied => (
                StatusCode::FORBIDDEN,
                "Esta empresa não pertence ao usuário autenticado.",
            ),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

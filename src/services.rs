pub mod auth;
pub mod cadastro_service;
pub mod dashboard_service;
pub mod empresa_service;
pub mod etapa_service;
pub mod historico_service;
pub mod indicadores;
pub mod notificacao_service;
pub mod periodo_service;
pub mod relatorio_service;
pub mod status_engine;

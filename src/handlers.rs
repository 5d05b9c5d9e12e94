pub mod auth;
pub mod cadastros;
pub mod dashboard;
pub mod empresas;
pub mod etapas;
pub mod historico;
pub mod importacao;
pub mod notificacoes;
pub mod periodos;
pub mod relatorios;

pub mod auth;
pub mod cadastro;
pub mod dashboard;
pub mod empresa;
pub mod etapa;
pub mod historico;
pub mod importacao;
pub mod notificacao;
pub mod periodo;
pub mod relatorio;

// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        CadastroRepository, EmpresaRepository, EtapaRepository, HistoricoRepository,
        PeriodoRepository, UserRepository,
    },
    services::{
        auth::AuthService, cadastro_service::CadastroService, dashboard_service::DashboardService,
        empresa_service::EmpresaService, etapa_service::EtapaService,
        historico_service::HistoricoService, notificacao_service::NotificacaoService,
        periodo_service::PeriodoService, relatorio_service::RelatorioService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub auth_service: AuthService,
    pub empresa_service: EmpresaService,
    pub periodo_service: PeriodoService,
    pub cadastro_service: CadastroService,
    pub etapa_service: EtapaService,
    pub dashboard_service: DashboardService,
    pub relatorio_service: RelatorioService,
    pub notificacao_service: NotificacaoService,
    pub historico_service: HistoricoService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let empresa_repo = EmpresaRepository::new(db_pool.clone());
        let periodo_repo = PeriodoRepository::new(db_pool.clone());
        let cadastro_repo = CadastroRepository::new(db_pool.clone());
        let etapa_repo = EtapaRepository::new(db_pool.clone());
        let historico_repo = HistoricoRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret.clone(), db_pool.clone());
        let empresa_service = EmpresaService::new(empresa_repo.clone());
        let periodo_service = PeriodoService::new(periodo_repo);
        let cadastro_service = CadastroService::new(cadastro_repo);
        let etapa_service = EtapaService::new(
            etapa_repo.clone(),
            historico_repo.clone(),
            periodo_service.clone(),
            db_pool.clone(),
        );
        let dashboard_service = DashboardService::new(etapa_repo, periodo_service.clone());
        let relatorio_service = RelatorioService::new(dashboard_service.clone());
        let notificacao_service =
            NotificacaoService::new(dashboard_service.clone(), empresa_repo);
        let historico_service = HistoricoService::new(historico_repo);

        Ok(Self {
            db_pool,
            jwt_secret,
            auth_service,
            empresa_service,
            periodo_service,
            cadastro_service,
            etapa_service,
            dashboard_service,
            relatorio_service,
            notificacao_service,
            historico_service,
        })
    }
}

//src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

// Importações principais
use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::{auth_guard, empresa_guard};

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas de usuário (protegidas pelo middleware de autenticação)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Empresas: só exigem o token; a propriedade é verificada no serviço
    let empresa_routes = Router::new()
        .route(
            "/",
            post(handlers::empresas::criar_empresa).get(handlers::empresas::listar_empresas),
        )
        .route(
            "/{id}",
            put(handlers::empresas::atualizar_empresa)
                .delete(handlers::empresas::deletar_empresa),
        )
        .route(
            "/{id}/notificacoes",
            put(handlers::empresas::atualizar_notificacoes),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Períodos e etapas: exigem token + cabeçalho x-empresa-id com posse
    let periodo_routes = Router::new()
        .route(
            "/",
            post(handlers::periodos::criar_periodo).get(handlers::periodos::listar_periodos),
        )
        .route(
            "/{periodo_id}",
            put(handlers::periodos::atualizar_periodo)
                .delete(handlers::periodos::deletar_periodo),
        )
        .route(
            "/{periodo_id}/etapas",
            post(handlers::etapas::criar_etapa).get(handlers::etapas::listar_etapas),
        )
        .route(
            "/{periodo_id}/etapas/importar",
            post(handlers::importacao::importar_etapas),
        )
        .route(
            "/{periodo_id}/etapas/{etapa_id}",
            put(handlers::etapas::atualizar_etapa).delete(handlers::etapas::deletar_etapa),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            empresa_guard,
        ));

    let cadastro_routes = Router::new()
        .route(
            "/areas",
            post(handlers::cadastros::criar_area).get(handlers::cadastros::listar_areas),
        )
        .route("/areas/{id}", delete(handlers::cadastros::deletar_area))
        .route(
            "/responsaveis",
            post(handlers::cadastros::criar_responsavel)
                .get(handlers::cadastros::listar_responsaveis),
        )
        .route(
            "/responsaveis/{id}",
            delete(handlers::cadastros::deletar_responsavel),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            empresa_guard,
        ));

    let dashboard_routes = Router::new()
        .route("/indicadores", get(handlers::dashboard::indicadores))
        .route("/por-area", get(handlers::dashboard::por_area))
        .route("/ranking", get(handlers::dashboard::ranking))
        .route("/timeline", get(handlers::dashboard::timeline))
        .route("/progresso", get(handlers::dashboard::progresso))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            empresa_guard,
        ));

    let relatorio_routes = Router::new()
        .route("/resumo", get(handlers::relatorios::resumo))
        .route("/exportar", get(handlers::relatorios::exportar))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            empresa_guard,
        ));

    let notificacao_routes = Router::new()
        .route("/alertas", get(handlers::notificacoes::alertas))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            empresa_guard,
        ));

    let historico_routes = Router::new()
        .route("/", get(handlers::historico::listar))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            empresa_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/empresas", empresa_routes)
        .nest("/api/periodos", periodo_routes)
        .nest("/api/cadastros", cadastro_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/relatorios", relatorio_routes)
        .nest("/api/notificacoes", notificacao_routes)
        .nest("/api/historico", historico_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}

// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Empresas ---
        handlers::empresas::criar_empresa,
        handlers::empresas::listar_empresas,
        handlers::empresas::atualizar_empresa,
        handlers::empresas::atualizar_notificacoes,
        handlers::empresas::deletar_empresa,

        // --- Períodos ---
        handlers::periodos::criar_periodo,
        handlers::periodos::listar_periodos,
        handlers::periodos::atualizar_periodo,
        handlers::periodos::deletar_periodo,

        // --- Cadastros ---
        handlers::cadastros::criar_area,
        handlers::cadastros::listar_areas,
        handlers::cadastros::deletar_area,
        handlers::cadastros::criar_responsavel,
        handlers::cadastros::listar_responsaveis,
        handlers::cadastros::deletar_responsavel,

        // --- Etapas ---
        handlers::etapas::criar_etapa,
        handlers::etapas::listar_etapas,
        handlers::etapas::atualizar_etapa,
        handlers::etapas::deletar_etapa,

        // --- Importação ---
        handlers::importacao::importar_etapas,

        // --- Dashboard ---
        handlers::dashboard::indicadores,
        handlers::dashboard::por_area,
        handlers::dashboard::ranking,
        handlers::dashboard::timeline,
        handlers::dashboard::progresso,

        // --- Relatórios ---
        handlers::relatorios::resumo,
        handlers::relatorios::exportar,

        // --- Notificações ---
        handlers::notificacoes::alertas,

        // --- Histórico ---
        handlers::historico::listar,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Empresas ---
            models::empresa::Empresa,
            models::notificacao::ConfigNotificacoesPayload,
            handlers::empresas::EmpresaPayload,

            // --- Períodos ---
            models::periodo::Periodo,
            handlers::periodos::CreatePeriodoPayload,
            handlers::periodos::UpdatePeriodoStatusPayload,

            // --- Cadastros ---
            models::cadastro::Area,
            models::cadastro::Responsavel,
            handlers::cadastros::CreateAreaPayload,
            handlers::cadastros::CreateResponsavelPayload,

            // --- Etapas ---
            models::etapa::StatusEtapa,
            models::etapa::Etapa,
            handlers::etapas::EtapaPayload,

            // --- Importação ---
            models::importacao::LinhaImportacao,
            models::importacao::ResultadoImportacao,
            handlers::importacao::ImportarEtapasPayload,

            // --- Dashboard ---
            models::dashboard::Indicadores,
            models::dashboard::AreaResumo,
            models::dashboard::RankingResponsavel,
            models::dashboard::DiaTimeline,
            models::dashboard::ProgressoDia,

            // --- Relatórios ---
            models::relatorio::RelatorioResumo,
            models::relatorio::AreaPercentual,
            models::relatorio::ResponsavelResumo,

            // --- Notificações ---
            models::notificacao::Alertas,
            models::notificacao::EtapaAlerta,

            // --- Histórico ---
            models::historico::RegistroHistorico,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário e Perfil"),
        (name = "Empresas", description = "Gestão de Empresas e Configuração de Alertas"),
        (name = "Periodos", description = "Períodos de Fechamento (mês/ano)"),
        (name = "Cadastros", description = "Áreas e Responsáveis"),
        (name = "Etapas", description = "Etapas do Fechamento (D+N, datas e status derivado)"),
        (name = "Importacao", description = "Importação em massa de etapas"),
        (name = "Dashboard", description = "Indicadores e Gráficos do Fechamento"),
        (name = "Relatorios", description = "Relatórios Gerenciais e Exportação CSV"),
        (name = "Notificacoes", description = "Alertas de Prazo e Atraso"),
        (name = "Historico", description = "Trilha de Auditoria")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

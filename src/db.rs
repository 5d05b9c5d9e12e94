pub mod cadastro_repo;
pub use cadastro_repo::CadastroRepository;
pub mod empresa_repo;
pub use empresa_repo::EmpresaRepository;
pub mod etapa_repo;
pub use etapa_repo::EtapaRepository;
pub mod historico_repo;
pub use historico_repo::HistoricoRepository;
pub mod periodo_repo;
pub use periodo_repo::PeriodoRepository;
pub mod user_repo;
pub use user_repo::UserRepository;

// src/services/etapa_service.rs

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{EtapaRepository, HistoricoRepository},
    models::{
        etapa::{Etapa, StatusEtapa},
        importacao::{LinhaImportacao, ResultadoImportacao},
    },
    services::{periodo_service::PeriodoService, status_engine},
};

// Linha de importação que passou na validação, pronta para inserir
struct LinhaValidada {
    nome: String,
    area: Option<String>,
    responsavel: Option<String>,
    ordem: i32,
    data_prevista: Option<NaiveDate>,
    data_real: Option<NaiveDate>,
    status: StatusEtapa,
}

#[derive(Clone)]
pub struct EtapaService {
    etapa_repo: EtapaRepository,
    historico_repo: HistoricoRepository,
    periodo_service: PeriodoService,
    pool: PgPool,
}

impl EtapaService {
    pub fn new(
        etapa_repo: EtapaRepository,
        historico_repo: HistoricoRepository,
        periodo_service: PeriodoService,
        pool: PgPool,
    ) -> Self {
        Self {
            etapa_repo,
            historico_repo,
            periodo_service,
            pool,
        }
    }

    /// Etapas do período, com o status rederivado para hoje. O valor salvo
    /// no banco é um cache da última escrita; a leitura sempre reapresenta
    /// o status corrente.
    pub async fn listar(&self, empresa_id: Uuid, periodo_id: Uuid) -> Result<Vec<Etapa>, AppError> {
        self.periodo_service.buscar(empresa_id, periodo_id).await?;

        let mut etapas = self.etapa_repo.listar_por_periodo(periodo_id).await?;
        status_engine::atualizar_colecao(&mut etapas, Utc::now().date_naive());
        Ok(etapas)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn criar(
        &self,
        empresa_id: Uuid,
        periodo_id: Uuid,
        usuario: &str,
        nome: &str,
        area: Option<&str>,
        responsavel: Option<&str>,
        ordem: i32,
        data_prevista: Option<NaiveDate>,
        data_real: Option<NaiveDate>,
    ) -> Result<Etapa, AppError> {
        self.periodo_service.buscar(empresa_id, periodo_id).await?;

        let status = status_engine::calcular_status(data_prevista, data_real, Utc::now().date_naive());

        // Etapa e registro de histórico entram na mesma transação
        let mut tx = self.pool.begin().await?;

        let etapa = self
            .etapa_repo
            .criar(
                &mut *tx,
                periodo_id,
                nome,
                area,
                responsavel,
                ordem,
                data_prevista,
                data_real,
                status,
            )
            .await?;

        self.historico_repo
            .registrar(
                &mut *tx,
                empresa_id,
                Some(periodo_id),
                nome,
                "criada",
                usuario,
                None,
            )
            .await?;

        tx.commit().await?;

        Ok(etapa)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn atualizar(
        &self,
        empresa_id: Uuid,
        periodo_id: Uuid,
        etapa_id: Uuid,
        usuario: &str,
        nome: &str,
        area: Option<&str>,
        responsavel: Option<&str>,
        ordem: i32,
        data_prevista: Option<NaiveDate>,
        data_real: Option<NaiveDate>,
    ) -> Result<Etapa, AppError> {
        self.periodo_service.buscar(empresa_id, periodo_id).await?;
        self.buscar(periodo_id, etapa_id).await?;

        // Toda mudança de datas rederiva o status antes de persistir
        let status = status_engine::calcular_status(data_prevista, data_real, Utc::now().date_naive());

        let mut tx = self.pool.begin().await?;

        let etapa = self
            .etapa_repo
            .atualizar(
                &mut *tx,
                etapa_id,
                nome,
                area,
                responsavel,
                ordem,
                data_prevista,
                data_real,
                status,
            )
            .await?
            .ok_or(AppError::EtapaNotFound)?;

        self.historico_repo
            .registrar(
                &mut *tx,
                empresa_id,
                Some(periodo_id),
                nome,
                "atualizada",
                usuario,
                None,
            )
            .await?;

        tx.commit().await?;

        Ok(etapa)
    }

    pub async fn deletar(
        &self,
        empresa_id: Uuid,
        periodo_id: Uuid,
        etapa_id: Uuid,
        usuario: &str,
    ) -> Result<(), AppError> {
        self.periodo_service.buscar(empresa_id, periodo_id).await?;
        let etapa = self.buscar(periodo_id, etapa_id).await?;

        let mut tx = self.pool.begin().await?;

        self.etapa_repo.deletar(&mut *tx, etapa_id).await?;

        self.historico_repo
            .registrar(
                &mut *tx,
                empresa_id,
                Some(periodo_id),
                &etapa.nome,
                "excluida",
                usuario,
                None,
            )
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Importação em massa de linhas já extraídas de uma planilha.
    /// Linhas inválidas são rejeitadas individualmente; as válidas entram
    /// todas em uma única transação.
    pub async fn importar(
        &self,
        empresa_id: Uuid,
        periodo_id: Uuid,
        usuario: &str,
        linhas: &[LinhaImportacao],
    ) -> Result<ResultadoImportacao, AppError> {
        self.periodo_service.buscar(empresa_id, periodo_id).await?;

        let hoje = Utc::now().date_naive();
        let (validadas, erros) = validar_linhas(linhas, hoje);

        if validadas.is_empty() {
            return Ok(ResultadoImportacao {
                importadas: 0,
                erros,
            });
        }

        let mut tx = self.pool.begin().await?;

        for linha in &validadas {
            self.etapa_repo
                .criar(
                    &mut *tx,
                    periodo_id,
                    &linha.nome,
                    linha.area.as_deref(),
                    linha.responsavel.as_deref(),
                    linha.ordem,
                    linha.data_prevista,
                    linha.data_real,
                    linha.status,
                )
                .await?;
        }

        let detalhes = format!("{} etapas importadas", validadas.len());
        self.historico_repo
            .registrar(
                &mut *tx,
                empresa_id,
                Some(periodo_id),
                "Importação de planilha",
                "importada",
                usuario,
                Some(&detalhes),
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Importação no período {}: {} etapas, {} erros",
            periodo_id,
            validadas.len(),
            erros.len()
        );

        Ok(ResultadoImportacao {
            importadas: validadas.len() as i64,
            erros,
        })
    }

    async fn buscar(&self, periodo_id: Uuid, etapa_id: Uuid) -> Result<Etapa, AppError> {
        let etapa = self
            .etapa_repo
            .find_by_id(etapa_id)
            .await?
            .ok_or(AppError::EtapaNotFound)?;

        if etapa.periodo_id != periodo_id {
            return Err(AppError::EtapaNotFound);
        }

        Ok(etapa)
    }
}

// Valida as linhas da planilha: nome é obrigatório, datas inválidas
// degradam para "sem data", ordem ausente vira a posição da linha.
// A numeração das mensagens começa em 2 (a linha 1 é o cabeçalho).
fn validar_linhas(linhas: &[LinhaImportacao], hoje: NaiveDate) -> (Vec<LinhaValidada>, Vec<String>) {
    let mut validadas = Vec::new();
    let mut erros = Vec::new();

    for (indice, linha) in linhas.iter().enumerate() {
        let numero_linha = indice + 2;

        let nome = match linha.nome.as_deref().map(str::trim) {
            Some(nome) if !nome.is_empty() => nome.to_string(),
            _ => {
                erros.push(format!("Linha {numero_linha}: Nome da etapa é obrigatório"));
                continue;
            }
        };

        let data_prevista = linha
            .data_prevista
            .as_deref()
            .and_then(status_engine::parse_data);
        let data_real = linha.data_real.as_deref().and_then(status_engine::parse_data);

        validadas.push(LinhaValidada {
            nome,
            area: linha.area.clone().filter(|a| !a.trim().is_empty()),
            responsavel: linha.responsavel.clone().filter(|r| !r.trim().is_empty()),
            ordem: linha.ordem.unwrap_or(indice as i32 + 1),
            data_prevista,
            data_real,
            status: status_engine::calcular_status(data_prevista, data_real, hoje),
        });
    }

    (validadas, erros)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    fn linha(nome: Option<&str>, prevista: Option<&str>, real: Option<&str>) -> LinhaImportacao {
        LinhaImportacao {
            nome: nome.map(str::to_string),
            area: None,
            responsavel: None,
            ordem: None,
            data_prevista: prevista.map(str::to_string),
            data_real: real.map(str::to_string),
        }
    }

    #[test]
    fn linha_sem_nome_e_rejeitada_com_numero_da_planilha() {
        let linhas = vec![
            linha(Some("Conciliação"), None, None),
            linha(None, None, None),
            linha(Some("   "), None, None),
        ];
        let (validadas, erros) = validar_linhas(&linhas, data(2024, 1, 6));

        assert_eq!(validadas.len(), 1);
        assert_eq!(
            erros,
            vec![
                "Linha 3: Nome da etapa é obrigatório".to_string(),
                "Linha 4: Nome da etapa é obrigatório".to_string(),
            ]
        );
    }

    #[test]
    fn ordem_ausente_vira_a_posicao_da_linha() {
        let mut linhas = vec![
            linha(Some("Primeira"), None, None),
            linha(Some("Segunda"), None, None),
        ];
        linhas[1].ordem = Some(7);

        let (validadas, _) = validar_linhas(&linhas, data(2024, 1, 6));
        assert_eq!(validadas[0].ordem, 1);
        assert_eq!(validadas[1].ordem, 7);
    }

    #[test]
    fn datas_invalidas_degradam_para_sem_data() {
        let linhas = vec![linha(Some("Apuração"), Some("06/01/2024"), Some("lixo"))];
        let (validadas, erros) = validar_linhas(&linhas, data(2024, 1, 6));

        assert!(erros.is_empty());
        assert_eq!(validadas[0].data_prevista, None);
        assert_eq!(validadas[0].data_real, None);
        // Sem nenhuma data, o motor resolve como pendente
        assert_eq!(validadas[0].status, StatusEtapa::Pendente);
    }

    #[test]
    fn importacao_usa_a_regra_canonica_de_status() {
        let linhas = vec![
            // Real depois da prevista
            linha(Some("Fechamento"), Some("2024-01-05"), Some("2024-01-06")),
            // Antecipada: colapsa em concluído, sem status próprio
            linha(Some("Estoque"), Some("2024-01-05"), Some("2024-01-03")),
            // Prevista vencida e sem real
            linha(Some("Impostos"), Some("2024-01-01"), None),
        ];
        let (validadas, _) = validar_linhas(&linhas, data(2024, 1, 6));

        assert_eq!(validadas[0].status, StatusEtapa::ConcluidoAtraso);
        assert_eq!(validadas[1].status, StatusEtapa::Concluido);
        assert_eq!(validadas[2].status, StatusEtapa::Atrasado);
    }
}

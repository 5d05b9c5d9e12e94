// src/services/indicadores.rs

use crate::models::dashboard::{
    AreaResumo, DiaTimeline, Indicadores, ProgressoDia, RankingResponsavel,
};
use crate::models::etapa::{Etapa, StatusEtapa};

// ---
// Agregadores do dashboard
// ---
// Redutores puros sobre uma coleção de etapas já etiquetadas com status.
// Determinísticos em relação ao conteúdo da coleção: reexecutar sobre o
// mesmo conjunto produz sempre o mesmo resultado, independente da ordem em
// que o conjunto foi montado.

/// Rótulo usado quando a etapa não tem área.
pub const SEM_AREA: &str = "Sem área";
/// Rótulo usado quando a etapa não tem responsável.
pub const SEM_RESPONSAVEL: &str = "Sem responsável";
/// Última posição D+N endereçada pela linha do tempo do fechamento.
pub const DIAS_TIMELINE: i32 = 10;

/// Área da etapa, com a sentinela aplicada a ausente/vazia.
pub fn area_da(etapa: &Etapa) -> &str {
    etapa
        .area
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(SEM_AREA)
}

/// Responsável da etapa, com a sentinela aplicada a ausente/vazio.
pub fn responsavel_da(etapa: &Etapa) -> &str {
    etapa
        .responsavel
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or(SEM_RESPONSAVEL)
}

/// round(100 * parte / total), com divisão por zero protegida.
fn percentual(parte: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    ((parte as f64 / total as f64) * 100.0).round() as i64
}

/// Contagens por status, percentuais e tempo médio de atraso.
/// As contagens somam exatamente `total`; os percentuais são arredondados
/// de forma independente.
pub fn resumir(etapas: &[Etapa]) -> Indicadores {
    let total = etapas.len() as i64;
    if total == 0 {
        return Indicadores::default();
    }

    let mut ind = Indicadores {
        total,
        ..Indicadores::default()
    };

    let mut total_dias_atraso = 0i64;
    let mut count_atrasos = 0i64;

    for etapa in etapas {
        match etapa.status {
            StatusEtapa::Concluido => ind.concluidas += 1,
            StatusEtapa::EmAndamento => ind.em_andamento += 1,
            StatusEtapa::Pendente => ind.pendentes += 1,
            StatusEtapa::Atrasado => ind.atrasadas += 1,
            StatusEtapa::ConcluidoAtraso => ind.concluidas_com_atraso += 1,
        }

        if etapa.status == StatusEtapa::ConcluidoAtraso {
            if let (Some(prevista), Some(real)) = (etapa.data_prevista, etapa.data_real) {
                let dias = real.signed_duration_since(prevista).num_days();
                if dias > 0 {
                    total_dias_atraso += dias;
                    count_atrasos += 1;
                }
            }
        }
    }

    ind.percentual_concluido = percentual(ind.concluidas + ind.concluidas_com_atraso, total);
    ind.percentual_atrasado = percentual(ind.atrasadas, total);
    ind.tempo_medio_atraso = if count_atrasos > 0 {
        (total_dias_atraso as f64 / count_atrasos as f64).round() as i64
    } else {
        0
    };

    ind
}

/// Agrupa por área na ordem da primeira ocorrência. Concluídas (com ou sem
/// atraso) e atrasadas contam nas suas colunas; todo o resto é pendente.
pub fn por_area(etapas: &[Etapa]) -> Vec<AreaResumo> {
    let mut resumos: Vec<AreaResumo> = Vec::new();

    for etapa in etapas {
        let area = area_da(etapa);
        let idx = match resumos.iter().position(|r| r.area == area) {
            Some(i) => i,
            None => {
                resumos.push(AreaResumo {
                    area: area.to_string(),
                    concluidas: 0,
                    pendentes: 0,
                    atrasadas: 0,
                });
                resumos.len() - 1
            }
        };

        let resumo = &mut resumos[idx];
        if etapa.status.concluida() {
            resumo.concluidas += 1;
        } else if etapa.status == StatusEtapa::Atrasado {
            resumo.atrasadas += 1;
        } else {
            resumo.pendentes += 1;
        }
    }

    resumos
}

/// Ranking de responsáveis por volume de etapas, decrescente, com empates
/// na ordem da primeira ocorrência (ordenação estável), truncado em `top_n`.
/// Aqui `atrasadas` conta tanto 'atrasado' quanto 'concluido_atraso'.
pub fn ranking_responsaveis(etapas: &[Etapa], top_n: usize) -> Vec<RankingResponsavel> {
    let mut ranking: Vec<RankingResponsavel> = Vec::new();

    for etapa in etapas {
        let nome = responsavel_da(etapa);
        let idx = match ranking.iter().position(|r| r.nome == nome) {
            Some(i) => i,
            None => {
                ranking.push(RankingResponsavel {
                    nome: nome.to_string(),
                    total: 0,
                    concluidas: 0,
                    atrasadas: 0,
                });
                ranking.len() - 1
            }
        };

        let entrada = &mut ranking[idx];
        entrada.total += 1;
        if etapa.status.concluida() {
            entrada.concluidas += 1;
        }
        if matches!(
            etapa.status,
            StatusEtapa::Atrasado | StatusEtapa::ConcluidoAtraso
        ) {
            entrada.atrasadas += 1;
        }
    }

    ranking.sort_by(|a, b| b.total.cmp(&a.total));
    ranking.truncate(top_n);
    ranking
}

/// Linha do tempo D+0..D+`max_offset`: sempre `max_offset + 1` baldes, mesmo
/// vazios. Etapas com `ordem` fora do intervalo (inclusive negativas) ficam
/// fora dos baldes mas continuam contando nos demais agregadores.
pub fn timeline(etapas: &[Etapa], max_offset: i32) -> Vec<DiaTimeline> {
    (0..=max_offset)
        .map(|i| {
            let mut total = 0i64;
            let mut concluidas = 0i64;
            for etapa in etapas.iter().filter(|e| e.ordem == i) {
                total += 1;
                if etapa.status.concluida() {
                    concluidas += 1;
                }
            }
            DiaTimeline {
                dia: format!("D+{i}"),
                total,
                concluidas,
                pendentes: total - concluidas,
            }
        })
        .collect()
}

/// Soma acumulada das concluídas ao longo da linha do tempo, como percentual
/// do total de etapas, pareada com a meta linear round(100*(i+1)/baldes).
pub fn progresso_acumulado(timeline: &[DiaTimeline], total_etapas: i64) -> Vec<ProgressoDia> {
    let baldes = timeline.len() as i64;
    let mut acumulado = 0i64;

    timeline
        .iter()
        .enumerate()
        .map(|(i, dia)| {
            acumulado += dia.concluidas;
            ProgressoDia {
                dia: dia.dia.clone(),
                progresso: percentual(acumulado, total_etapas),
                meta: percentual(i as i64 + 1, baldes),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    fn etapa(
        ordem: i32,
        area: Option<&str>,
        responsavel: Option<&str>,
        prevista: Option<NaiveDate>,
        real: Option<NaiveDate>,
        status: StatusEtapa,
    ) -> Etapa {
        let agora = Utc::now();
        Etapa {
            id: Uuid::new_v4(),
            periodo_id: Uuid::new_v4(),
            nome: format!("Etapa D+{ordem}"),
            area: area.map(str::to_string),
            responsavel: responsavel.map(str::to_string),
            ordem,
            data_prevista: prevista,
            data_real: real,
            status,
            criado_em: agora,
            atualizado_em: agora,
        }
    }

    #[test]
    fn resumir_vazio_devolve_tudo_zerado() {
        assert_eq!(resumir(&[]), Indicadores::default());
    }

    #[test]
    fn resumir_contagens_somam_o_total() {
        let etapas = vec![
            etapa(0, None, None, None, None, StatusEtapa::Pendente),
            etapa(1, None, None, None, None, StatusEtapa::EmAndamento),
            etapa(2, None, None, None, None, StatusEtapa::Atrasado),
            etapa(3, None, None, None, None, StatusEtapa::Concluido),
            etapa(4, None, None, None, None, StatusEtapa::ConcluidoAtraso),
            etapa(5, None, None, None, None, StatusEtapa::Pendente),
        ];
        let ind = resumir(&etapas);
        assert_eq!(ind.total, 6);
        assert_eq!(
            ind.concluidas
                + ind.em_andamento
                + ind.pendentes
                + ind.atrasadas
                + ind.concluidas_com_atraso,
            ind.total
        );
    }

    // Uma concluída com atraso, uma em andamento: metade concluída
    #[test]
    fn resumir_cenario_metade_concluida() {
        let etapas = vec![
            etapa(
                0,
                None,
                None,
                Some(data(2024, 1, 5)),
                Some(data(2024, 1, 6)),
                StatusEtapa::ConcluidoAtraso,
            ),
            etapa(
                1,
                None,
                None,
                Some(data(2024, 1, 6)),
                None,
                StatusEtapa::EmAndamento,
            ),
        ];
        let ind = resumir(&etapas);
        assert_eq!(ind.total, 2);
        assert_eq!(ind.concluidas_com_atraso, 1);
        assert_eq!(ind.em_andamento, 1);
        assert_eq!(ind.percentual_concluido, 50);
        // Um dia de atraso na única concluída com atraso
        assert_eq!(ind.tempo_medio_atraso, 1);
    }

    #[test]
    fn resumir_etapa_sem_datas_zera_percentuais() {
        let etapas = vec![etapa(0, None, None, None, None, StatusEtapa::Pendente)];
        let ind = resumir(&etapas);
        assert_eq!(ind.percentual_concluido, 0);
        assert_eq!(ind.percentual_atrasado, 0);
        assert_eq!(ind.tempo_medio_atraso, 0);
    }

    #[test]
    fn tempo_medio_considera_apenas_atrasos_positivos() {
        let etapas = vec![
            // Dois dias de atraso
            etapa(
                0,
                None,
                None,
                Some(data(2024, 1, 1)),
                Some(data(2024, 1, 3)),
                StatusEtapa::ConcluidoAtraso,
            ),
            // Quatro dias de atraso
            etapa(
                1,
                None,
                None,
                Some(data(2024, 1, 2)),
                Some(data(2024, 1, 6)),
                StatusEtapa::ConcluidoAtraso,
            ),
            // Status inconsistente com as datas: atraso zero não entra na média
            etapa(
                2,
                None,
                None,
                Some(data(2024, 1, 5)),
                Some(data(2024, 1, 5)),
                StatusEtapa::ConcluidoAtraso,
            ),
            // Concluída no prazo não participa
            etapa(
                3,
                None,
                None,
                Some(data(2024, 1, 5)),
                Some(data(2024, 1, 4)),
                StatusEtapa::Concluido,
            ),
        ];
        // (2 + 4) / 2 = 3
        assert_eq!(resumir(&etapas).tempo_medio_atraso, 3);
    }

    #[test]
    fn tempo_medio_arredonda_para_o_inteiro_mais_proximo() {
        let etapas = vec![
            etapa(
                0,
                None,
                None,
                Some(data(2024, 1, 1)),
                Some(data(2024, 1, 2)),
                StatusEtapa::ConcluidoAtraso,
            ),
            etapa(
                1,
                None,
                None,
                Some(data(2024, 1, 1)),
                Some(data(2024, 1, 3)),
                StatusEtapa::ConcluidoAtraso,
            ),
        ];
        // (1 + 2) / 2 = 1.5 -> 2
        assert_eq!(resumir(&etapas).tempo_medio_atraso, 2);
    }

    // Cenário de ponta a ponta: deriva os status pelo motor e agrega
    #[test]
    fn fluxo_derivacao_e_resumo() {
        use crate::services::status_engine;

        let hoje = data(2024, 1, 6);
        let mut etapas = vec![
            etapa(
                0,
                None,
                None,
                Some(data(2024, 1, 5)),
                Some(data(2024, 1, 6)),
                StatusEtapa::Pendente,
            ),
            etapa(
                1,
                None,
                None,
                Some(data(2024, 1, 6)),
                None,
                StatusEtapa::Pendente,
            ),
        ];
        status_engine::atualizar_colecao(&mut etapas, hoje);

        assert_eq!(etapas[0].status, StatusEtapa::ConcluidoAtraso);
        assert_eq!(etapas[1].status, StatusEtapa::EmAndamento);

        let ind = resumir(&etapas);
        assert_eq!(ind.total, 2);
        assert_eq!(ind.concluidas_com_atraso, 1);
        assert_eq!(ind.em_andamento, 1);
        assert_eq!(ind.percentual_concluido, 50);
    }

    #[test]
    fn por_area_agrupa_na_ordem_de_aparicao_com_sentinela() {
        let etapas = vec![
            etapa(0, Some("Fiscal"), None, None, None, StatusEtapa::Concluido),
            etapa(1, None, None, None, None, StatusEtapa::Pendente),
            etapa(2, Some("Contábil"), None, None, None, StatusEtapa::Atrasado),
            etapa(
                3,
                Some("Fiscal"),
                None,
                None,
                None,
                StatusEtapa::ConcluidoAtraso,
            ),
            etapa(4, Some(""), None, None, None, StatusEtapa::EmAndamento),
        ];
        let resumos = por_area(&etapas);

        assert_eq!(resumos.len(), 3);
        assert_eq!(resumos[0].area, "Fiscal");
        assert_eq!(resumos[0].concluidas, 2);
        assert_eq!(resumos[1].area, SEM_AREA);
        // Área vazia também cai na sentinela; em andamento conta como pendente
        assert_eq!(resumos[1].pendentes, 2);
        assert_eq!(resumos[2].area, "Contábil");
        assert_eq!(resumos[2].atrasadas, 1);
    }

    #[test]
    fn ranking_ordena_por_total_e_trunca() {
        let etapas = vec![
            etapa(0, None, Some("Ana"), None, None, StatusEtapa::Concluido),
            etapa(1, None, Some("Bruno"), None, None, StatusEtapa::Atrasado),
            etapa(2, None, Some("Ana"), None, None, StatusEtapa::ConcluidoAtraso),
            etapa(3, None, Some("Carla"), None, None, StatusEtapa::Pendente),
            etapa(4, None, Some("Ana"), None, None, StatusEtapa::Pendente),
            etapa(5, None, Some("Bruno"), None, None, StatusEtapa::Concluido),
            etapa(6, None, None, None, None, StatusEtapa::Atrasado),
        ];
        let ranking = ranking_responsaveis(&etapas, 2);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].nome, "Ana");
        assert_eq!(ranking[0].total, 3);
        assert_eq!(ranking[0].concluidas, 2);
        // 'concluido_atraso' também conta como atrasada no ranking
        assert_eq!(ranking[0].atrasadas, 1);
        assert_eq!(ranking[1].nome, "Bruno");
        assert_eq!(ranking[1].total, 2);
    }

    #[test]
    fn ranking_empate_preserva_ordem_de_aparicao() {
        let etapas = vec![
            etapa(0, None, Some("Bruno"), None, None, StatusEtapa::Pendente),
            etapa(1, None, Some("Ana"), None, None, StatusEtapa::Pendente),
        ];
        let ranking = ranking_responsaveis(&etapas, 5);
        assert_eq!(ranking[0].nome, "Bruno");
        assert_eq!(ranking[1].nome, "Ana");
        // Não decrescente por total
        assert!(ranking.windows(2).all(|par| par[0].total >= par[1].total));
    }

    #[test]
    fn timeline_emite_todos_os_baldes_mesmo_vazios() {
        let buckets = timeline(&[], DIAS_TIMELINE);
        assert_eq!(buckets.len(), 11);
        assert!(buckets.iter().all(|b| b.total == 0 && b.pendentes == 0));
        assert_eq!(buckets[0].dia, "D+0");
        assert_eq!(buckets[10].dia, "D+10");
    }

    #[test]
    fn timeline_tolera_ordens_duplicadas_e_exclui_fora_do_intervalo() {
        let etapas = vec![
            etapa(3, None, None, None, None, StatusEtapa::Concluido),
            etapa(3, None, None, None, None, StatusEtapa::Pendente),
            etapa(3, None, None, None, None, StatusEtapa::ConcluidoAtraso),
            // Fora do intervalo endereçável: não aparece em nenhum balde
            etapa(11, None, None, None, None, StatusEtapa::Concluido),
            etapa(-1, None, None, None, None, StatusEtapa::Pendente),
        ];
        let buckets = timeline(&etapas, DIAS_TIMELINE);

        assert_eq!(buckets[3].total, 3);
        assert_eq!(buckets[3].concluidas, 2);
        assert_eq!(buckets[3].pendentes, 1);
        let soma: i64 = buckets.iter().map(|b| b.total).sum();
        assert_eq!(soma, 3);
        // Mas o resumo continua contando as cinco
        assert_eq!(resumir(&etapas).total, 5);
    }

    #[test]
    fn progresso_acumulado_e_monotonico_e_protegido_contra_zero() {
        let etapas = vec![
            etapa(0, None, None, None, None, StatusEtapa::Concluido),
            etapa(1, None, None, None, None, StatusEtapa::Concluido),
            etapa(2, None, None, None, None, StatusEtapa::Pendente),
            etapa(10, None, None, None, None, StatusEtapa::ConcluidoAtraso),
        ];
        let buckets = timeline(&etapas, DIAS_TIMELINE);
        let progresso = progresso_acumulado(&buckets, etapas.len() as i64);

        assert_eq!(progresso.len(), 11);
        // 1 de 4 concluídas em D+0
        assert_eq!(progresso[0].progresso, 25);
        assert_eq!(progresso[1].progresso, 50);
        // A última concluída entra no balde D+10
        assert_eq!(progresso[10].progresso, 75);
        assert!(
            progresso
                .windows(2)
                .all(|par| par[0].progresso <= par[1].progresso)
        );
        // Meta linear: round(100 * (i+1) / 11)
        assert_eq!(progresso[0].meta, 9);
        assert_eq!(progresso[10].meta, 100);

        // Coleção vazia: progresso zerado, sem divisão por zero
        let vazio = progresso_acumulado(&timeline(&[], DIAS_TIMELINE), 0);
        assert!(vazio.iter().all(|p| p.progresso == 0));
    }
}

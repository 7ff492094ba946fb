use crate::config::ExamConfig;
use crate::data::QuestionBank;
use crate::model::Question;
use rand::Rng;
use rand::seq::SliceRandom;

/// Muestreo estratificado sin reemplazo: por cada categoría se baraja su
/// grupo (Fisher-Yates) y se toman `min(cupo, disponibles)`; al final se
/// baraja todo para intercalar categorías.
pub fn stratified_draw<R: Rng + ?Sized>(
    bank: &QuestionBank,
    config: &ExamConfig,
    rng: &mut R,
) -> Vec<Question> {
    let mut drawn: Vec<Question> = Vec::with_capacity(config.total_questions);

    for quota in &config.categories {
        let mut pool = bank.by_kind(quota.kind);
        let take = quota.count.min(pool.len());
        if take < quota.count {
            log::debug!(
                "{:?}: requested {} questions, only {} available",
                quota.kind,
                quota.count,
                pool.len()
            );
        }
        pool.shuffle(rng);
        drawn.extend(pool.into_iter().take(take).cloned());
    }

    drawn.shuffle(rng);
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryQuota;
    use crate::data::sample_bank;
    use crate::model::QuestionKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn config_10_80_10() -> ExamConfig {
        ExamConfig {
            total_questions: 100,
            time_limit_secs: 60,
            pass_score: 60.0,
            categories: vec![
                CategoryQuota { kind: QuestionKind::TrueFalse, count: 10, points: 1.0 },
                CategoryQuota { kind: QuestionKind::SingleChoice, count: 80, points: 1.0 },
                CategoryQuota { kind: QuestionKind::MultiChoice, count: 10, points: 1.0 },
            ],
        }
    }

    fn count(drawn: &[Question], kind: QuestionKind) -> usize {
        drawn.iter().filter(|q| q.kind == kind).count()
    }

    #[test]
    fn sufficient_pools_give_exact_quotas() {
        let bank = sample_bank(25, 120, 15);
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = stratified_draw(&bank, &config_10_80_10(), &mut rng);

        assert_eq!(drawn.len(), 100);
        assert_eq!(count(&drawn, QuestionKind::TrueFalse), 10);
        assert_eq!(count(&drawn, QuestionKind::SingleChoice), 80);
        assert_eq!(count(&drawn, QuestionKind::MultiChoice), 10);

        let ids: HashSet<&str> = drawn.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), drawn.len(), "sin reemplazo");
    }

    #[test]
    fn short_pool_is_a_silent_shortfall() {
        let bank = sample_bank(3, 90, 10);
        let mut rng = StdRng::seed_from_u64(2);
        let drawn = stratified_draw(&bank, &config_10_80_10(), &mut rng);

        assert_eq!(count(&drawn, QuestionKind::TrueFalse), 3);
        assert_eq!(drawn.len(), 93);
    }

    #[test]
    fn empty_bank_draws_nothing() {
        let bank = sample_bank(0, 0, 0);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(stratified_draw(&bank, &config_10_80_10(), &mut rng).is_empty());
    }

    #[test]
    fn categories_are_interleaved() {
        let bank = sample_bank(25, 120, 15);
        let mut rng = StdRng::seed_from_u64(4);
        let drawn = stratified_draw(&bank, &config_10_80_10(), &mut rng);
        // Sin la mezcla final las 10 primeras serían todas V/F
        assert!(drawn[..10].iter().any(|q| q.kind != QuestionKind::TrueFalse));
    }
}

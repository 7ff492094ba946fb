use super::ExamState;
use crate::config::ExamConfig;

/// Resultado de un examen entregado
#[derive(Clone, Debug, PartialEq)]
pub struct ExamReport {
    pub score: f64,
    pub max_score: f64,
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
    pub elapsed_secs: u32,
    pub passed: bool,
}

/// ¿Coincide la respuesta guardada en `position` con la correcta?
pub fn is_position_correct(state: &ExamState, position: usize) -> bool {
    match (state.questions.get(position), state.user_answers.get(&position)) {
        (Some(q), Some(given)) => *given == q.answer,
        _ => false,
    }
}

/// Suma de puntos de las posiciones acertadas; las falladas o vacías valen 0
pub fn score(state: &ExamState, config: &ExamConfig) -> f64 {
    state
        .questions
        .iter()
        .enumerate()
        .filter(|(i, _)| is_position_correct(state, *i))
        .map(|(_, q)| config.points_for(q.kind))
        .sum()
}

pub fn report(state: &ExamState, config: &ExamConfig) -> ExamReport {
    let score = score(state, config);
    let max_score = state
        .questions
        .iter()
        .map(|q| config.points_for(q.kind))
        .sum();
    let correct = (0..state.questions.len())
        .filter(|i| is_position_correct(state, *i))
        .count();

    ExamReport {
        score,
        max_score,
        correct,
        answered: state.user_answers.len(),
        total: state.questions.len(),
        elapsed_secs: config.time_limit_secs.saturating_sub(state.time_remaining),
        passed: score >= config.pass_score,
    }
}

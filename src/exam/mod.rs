// src/exam/mod.rs
//
// Motor del examen simulado: muestreo, registro de respuestas, cuenta atrás
// y corrección.

use crate::config::ExamConfig;
use crate::data::QuestionBank;
use crate::model::Question;
use crate::storage::{json_field, json_object};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod sampler;
pub mod scoring;
pub mod timer;

pub use scoring::ExamReport;
pub use timer::ExamTimer;

/// Estado persistido del examen (como mucho uno en curso)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExamState {
    pub is_active: bool,
    pub questions: Vec<Question>,
    pub user_answers: BTreeMap<usize, String>,
    pub time_remaining: u32,
    pub start_time: i64, // ms desde epoch
}

impl ExamState {
    /// Carga tolerante, campo a campo. Un examen sin preguntas nunca queda activo
    /// y se descartan respuestas a posiciones inexistentes.
    pub fn from_json_lenient(text: &str) -> Self {
        let mut state = Self::default();
        let Some(obj) = json_object(text, "exam") else {
            return state;
        };

        if let Some(v) = json_field(&obj, "exam", "isActive") {
            state.is_active = v;
        }
        if let Some(v) = json_field(&obj, "exam", "questions") {
            state.questions = v;
        }
        if let Some(v) = json_field(&obj, "exam", "timeRemaining") {
            state.time_remaining = v;
        }
        if let Some(v) = json_field(&obj, "exam", "startTime") {
            state.start_time = v;
        }
        if let Some(answers) = json_field::<BTreeMap<String, String>>(&obj, "exam", "userAnswers") {
            for (key, answer) in answers {
                match key.parse::<usize>() {
                    Ok(pos) if pos < state.questions.len() => {
                        state.user_answers.insert(pos, answer);
                    }
                    _ => log::warn!("ignoring stored answer for position '{key}'"),
                }
            }
        }

        if state.questions.is_empty() {
            state.is_active = false;
        }
        state
    }
}

/// Fases del examen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamPhase {
    NotStarted,
    Active,
    Submitted,
    /// Vuelto al inicio tras entregar; preguntas y respuestas quedan inertes
    Inactive,
}

/// Lo que ha hecho un tick de la cuenta atrás
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Idle,
    Running { remaining: u32 },
    Expired(ExamReport),
}

#[derive(Debug)]
pub struct ExamEngine {
    config: ExamConfig,
    state: ExamState,
    // No se persiste: tras recargar, un examen activo sigue sin entregar
    submitted: bool,
    generation: u64,
}

impl ExamEngine {
    pub fn new(config: ExamConfig, state: ExamState) -> Self {
        Self {
            config,
            state,
            submitted: false,
            generation: 0,
        }
    }

    pub fn config(&self) -> &ExamConfig {
        &self.config
    }

    pub fn state(&self) -> &ExamState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> ExamPhase {
        match (self.state.is_active, self.submitted) {
            (true, false) => ExamPhase::Active,
            (true, true) => ExamPhase::Submitted,
            (false, _) if self.state.questions.is_empty() => ExamPhase::NotStarted,
            (false, _) => ExamPhase::Inactive,
        }
    }

    /// La cuenta atrás sólo corre con el examen activo y sin entregar
    pub fn timer_running(&self) -> bool {
        self.phase() == ExamPhase::Active
    }

    /// Empieza un examen nuevo y descarta cualquier anterior
    pub fn start<R: Rng + ?Sized>(&mut self, bank: &QuestionBank, rng: &mut R) {
        let questions = sampler::stratified_draw(bank, &self.config, rng);
        if questions.len() < self.config.total_questions {
            log::debug!(
                "exam drew {} of {} configured questions",
                questions.len(),
                self.config.total_questions
            );
        }
        if self.phase() == ExamPhase::Active {
            log::info!("abandoning unfinished exam");
        }

        self.state = ExamState {
            is_active: true,
            questions,
            user_answers: BTreeMap::new(),
            time_remaining: self.config.time_limit_secs,
            start_time: chrono::Utc::now().timestamp_millis(),
        };
        self.submitted = false;
        self.generation += 1;
        log::info!(
            "exam #{} started with {} questions",
            self.generation,
            self.state.questions.len()
        );
    }

    /// Guarda (o reemplaza) la respuesta normalizada de una posición.
    /// Una respuesta vacía deja la posición sin contestar.
    pub fn record_answer(&mut self, position: usize, normalized: &str) -> bool {
        if self.phase() != ExamPhase::Active {
            log::warn!("answer for position {position} ignored: exam not in progress");
            return false;
        }
        if position >= self.state.questions.len() {
            log::warn!("answer for position {position} ignored: out of range");
            return false;
        }
        if normalized.is_empty() {
            self.state.user_answers.remove(&position);
        } else {
            self.state.user_answers.insert(position, normalized.to_string());
        }
        true
    }

    pub fn answer_at(&self, position: usize) -> Option<&str> {
        self.state.user_answers.get(&position).map(String::as_str)
    }

    pub fn unanswered_count(&self) -> usize {
        self.state
            .questions
            .len()
            .saturating_sub(self.state.user_answers.len())
    }

    /// Un segundo de cuenta atrás. Al llegar a 0 entrega automáticamente,
    /// una sola vez.
    pub fn tick(&mut self, on_update_stats: impl FnMut(bool, &str)) -> TickOutcome {
        if !self.timer_running() {
            return TickOutcome::Idle;
        }
        self.state.time_remaining = self.state.time_remaining.saturating_sub(1);
        if self.state.time_remaining == 0 {
            log::debug!("exam #{} ran out of time", self.generation);
            return TickOutcome::Expired(self.submit(on_update_stats));
        }
        TickOutcome::Running {
            remaining: self.state.time_remaining,
        }
    }

    /// Entrega el examen. Sólo la primera llamada informa de cada acierto o
    /// fallo a las estadísticas; las siguientes devuelven el mismo informe.
    pub fn submit(&mut self, mut on_update_stats: impl FnMut(bool, &str)) -> ExamReport {
        if self.phase() == ExamPhase::Active {
            self.submitted = true;
            for (i, q) in self.state.questions.iter().enumerate() {
                on_update_stats(scoring::is_position_correct(&self.state, i), &q.id);
            }
            let report = self.report();
            log::info!(
                "exam #{} submitted: {}/{} points, {}/{} correct",
                self.generation,
                report.score,
                report.max_score,
                report.correct,
                report.total
            );
            report
        } else {
            self.report()
        }
    }

    pub fn report(&self) -> ExamReport {
        scoring::report(&self.state, &self.config)
    }

    pub fn is_position_correct(&self, position: usize) -> bool {
        scoring::is_position_correct(&self.state, position)
    }

    /// Volver al inicio: el examen queda inactivo, preguntas y respuestas se conservan
    pub fn return_home(&mut self) {
        self.state.is_active = false;
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryQuota;
    use crate::data::sample_bank;
    use crate::model::QuestionKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    fn config(time_limit_secs: u32) -> ExamConfig {
        ExamConfig {
            total_questions: 8,
            time_limit_secs,
            pass_score: 3.0,
            categories: vec![
                CategoryQuota { kind: QuestionKind::TrueFalse, count: 2, points: 0.5 },
                CategoryQuota { kind: QuestionKind::SingleChoice, count: 4, points: 0.5 },
                CategoryQuota { kind: QuestionKind::MultiChoice, count: 2, points: 1.0 },
            ],
        }
    }

    fn started(time_limit_secs: u32) -> ExamEngine {
        let mut engine = ExamEngine::new(config(time_limit_secs), ExamState::default());
        let mut rng = StdRng::seed_from_u64(11);
        engine.start(&sample_bank(5, 5, 5), &mut rng);
        engine
    }

    fn answer_all_correctly(engine: &mut ExamEngine) {
        let answers: Vec<String> = engine
            .state()
            .questions
            .iter()
            .map(|q| q.answer.clone())
            .collect();
        for (i, a) in answers.iter().enumerate() {
            assert!(engine.record_answer(i, a));
        }
    }

    #[test]
    fn start_initializes_a_fresh_exam() {
        let engine = started(120);
        let state = engine.state();
        assert_eq!(engine.phase(), ExamPhase::Active);
        assert_eq!(state.questions.len(), 8);
        assert!(state.user_answers.is_empty());
        assert_eq!(state.time_remaining, 120);
        assert!(state.start_time > 0);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn perfect_exam_scores_the_maximum() {
        let mut engine = started(120);
        answer_all_correctly(&mut engine);
        let mut reported = Vec::new();
        let report = engine.submit(|ok, id| reported.push((ok, id.to_string())));

        assert_eq!(report.score, 0.5 * 2.0 + 0.5 * 4.0 + 1.0 * 2.0);
        assert_eq!(report.score, report.max_score);
        assert_eq!(report.correct, 8);
        assert!(report.passed);
        assert_eq!(reported.len(), 8);
        assert!(reported.iter().all(|(ok, _)| *ok));
    }

    #[test]
    fn unanswered_and_wrong_positions_score_zero() {
        let mut engine = started(120);
        let first = engine.state().questions[0].clone();
        engine.record_answer(0, "Z");
        let mut wrong_ids = Vec::new();
        let report = engine.submit(|ok, id| {
            if !ok {
                wrong_ids.push(id.to_string());
            }
        });
        assert_eq!(report.score, 0.0);
        assert_eq!(report.answered, 1);
        assert!(!report.passed);
        assert_eq!(wrong_ids.len(), 8);
        assert!(wrong_ids.contains(&first.id));
    }

    #[test]
    fn submit_is_idempotent() {
        let mut engine = started(120);
        answer_all_correctly(&mut engine);
        let mut calls = 0;
        let first = engine.submit(|_, _| calls += 1);
        let second = engine.submit(|_, _| calls += 1);
        assert_eq!(calls, 8);
        assert_eq!(first, second);
        assert_eq!(engine.phase(), ExamPhase::Submitted);
        assert!(!engine.record_answer(0, "A"), "no se aceptan respuestas tras entregar");
    }

    #[test]
    fn later_answer_replaces_earlier_one() {
        let mut engine = started(120);
        let correct = engine.state().questions[3].answer.clone();
        engine.record_answer(3, "Z");
        engine.record_answer(3, &correct);
        assert_eq!(engine.answer_at(3), Some(correct.as_str()));
        assert!(engine.is_position_correct(3));
        assert_eq!(engine.unanswered_count(), 7);

        engine.record_answer(3, "");
        assert_eq!(engine.answer_at(3), None);
        assert!(!engine.record_answer(99, "A"));
    }

    #[test]
    fn countdown_auto_submits_exactly_once() {
        let mut engine = started(5);
        let mut reports = 0;
        let mut stat_updates = 0;
        for n in 1..=5u32 {
            match engine.tick(|_, _| stat_updates += 1) {
                TickOutcome::Running { remaining } => assert_eq!(remaining, 5 - n),
                TickOutcome::Expired(report) => {
                    assert_eq!(n, 5);
                    assert_eq!(report.elapsed_secs, 5);
                    reports += 1;
                }
                TickOutcome::Idle => panic!("tick {n} should run"),
            }
        }
        for _ in 0..3 {
            assert_eq!(engine.tick(|_, _| stat_updates += 1), TickOutcome::Idle);
        }
        assert_eq!(reports, 1);
        assert_eq!(stat_updates, 8);
        assert_eq!(engine.state().time_remaining, 0);
    }

    #[test]
    fn phases_follow_the_exam_lifecycle() {
        let mut engine = ExamEngine::new(config(30), ExamState::default());
        assert_eq!(engine.phase(), ExamPhase::NotStarted);
        assert!(!engine.timer_running());

        engine.start(&sample_bank(5, 5, 5), &mut StdRng::seed_from_u64(5));
        assert!(engine.timer_running());
        engine.submit(|_, _| {});
        assert!(!engine.timer_running());

        engine.return_home();
        assert_eq!(engine.phase(), ExamPhase::Inactive);
        assert_eq!(engine.state().questions.len(), 8);

        engine.start(&sample_bank(5, 5, 5), &mut StdRng::seed_from_u64(6));
        assert_eq!(engine.phase(), ExamPhase::Active);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn stored_exam_round_trips_and_tolerates_bad_fields() {
        let mut engine = started(120);
        engine.record_answer(1, "A");
        let json = serde_json::to_value(engine.state()).expect("json");
        assert_eq!(json["userAnswers"]["1"], "A");
        assert_eq!(json["isActive"], true);

        let restored = ExamState::from_json_lenient(&json.to_string());
        assert_eq!(&restored, engine.state());

        let mut broken = json.clone();
        broken["timeRemaining"] = Value::String("soon".into());
        broken["userAnswers"]["42"] = Value::String("B".into());
        let restored = ExamState::from_json_lenient(&broken.to_string());
        assert_eq!(restored.time_remaining, 0);
        assert_eq!(restored.questions.len(), 8);
        assert_eq!(restored.user_answers.len(), 1);

        let mut no_questions = json;
        no_questions["questions"] = Value::Null;
        let restored = ExamState::from_json_lenient(&no_questions.to_string());
        assert!(!restored.is_active);
        assert!(restored.user_answers.is_empty());

        assert_eq!(ExamState::from_json_lenient("garbage"), ExamState::default());
    }
}

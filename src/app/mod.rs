use crate::config::ExamConfig;
use crate::data::QuestionBank;
use crate::exam::{ExamEngine, ExamPhase, ExamReport, ExamState, ExamTimer, TickOutcome};
use crate::judge::{self, Verdict};
use crate::model::{AppState, Question, QuestionKind};
use crate::stats::{StatsAction, UserStats};
use crate::storage::{self, EXAM_KEY, KeyValueStore, STATS_KEY};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::time::Instant;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{AnswerCell, HomeSummary, ResultSummary};

/// Preferencias de interfaz, guardadas en el almacenamiento de eframe
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

/// Contenedor único del estado: banco, estadísticas, examen y almacenamiento.
/// Cada cambio pasa por un reductor y se persiste justo después.
pub struct QuizApp {
    pub bank: QuestionBank,
    pub stats: UserStats,
    pub exam: ExamEngine,
    pub state: AppState,
    pub prefs: UiPrefs,
    pub message: String,

    // Estado local de las vistas (no se persiste)
    pub practice_kind: QuestionKind,
    pub selection: Vec<char>,
    pub revealed: bool,
    pub exam_cursor: usize,
    pub confirm_submit: bool,
    pub wrong_cursor: usize,
    pub random_order: Vec<usize>,
    pub random_cursor: usize,
    pub show_answer_card: bool,
    // Pregunta a la que pertenecen `selection` y `revealed`
    card_question: Option<String>,

    store: Box<dyn KeyValueStore>,
    timer: ExamTimer,
    rng: StdRng,
}

impl QuizApp {
    /// Construye la aplicación cargando estadísticas y examen desde `store`
    pub fn new(
        bank: QuestionBank,
        config: ExamConfig,
        store: Box<dyn KeyValueStore>,
        rng: StdRng,
    ) -> Self {
        let stats = store
            .get_string(STATS_KEY)
            .map(|text| UserStats::from_json_lenient(&text))
            .unwrap_or_default();
        let exam_state = store
            .get_string(EXAM_KEY)
            .map(|text| ExamState::from_json_lenient(&text))
            .unwrap_or_default();
        if exam_state.is_active {
            log::info!(
                "resuming exam with {} questions, {}s left",
                exam_state.questions.len(),
                exam_state.time_remaining
            );
        }

        Self {
            bank,
            stats,
            exam: ExamEngine::new(config, exam_state),
            state: AppState::Home,
            prefs: UiPrefs::default(),
            message: String::new(),
            practice_kind: QuestionKind::SingleChoice,
            selection: vec![],
            revealed: false,
            exam_cursor: 0,
            confirm_submit: false,
            wrong_cursor: 0,
            random_order: vec![],
            random_cursor: 0,
            show_answer_card: false,
            card_question: None,
            store,
            timer: ExamTimer::default(),
            rng,
        }
    }

    /// Banco y configuración embebidos, almacenamiento en la carpeta de datos
    pub fn from_defaults() -> Self {
        let bank = QuestionBank::embedded().unwrap_or_else(|e| {
            log::error!("{e}; starting with an empty question bank");
            QuestionBank::default()
        });
        Self::new(
            bank,
            ExamConfig::embedded(),
            storage::open_default_store(),
            StdRng::from_entropy(),
        )
    }

    fn persist_stats(&mut self) {
        storage::persist(self.store.as_mut(), STATS_KEY, &self.stats);
    }

    fn persist_exam(&mut self) {
        storage::persist(self.store.as_mut(), EXAM_KEY, self.exam.state());
    }

    /// Aplica una acción al reductor de estadísticas y persiste
    fn dispatch(&mut self, action: StatsAction) {
        self.stats = std::mem::take(&mut self.stats).reduce(action);
        self.persist_stats();
    }

    /// Limpia la selección de la tarjeta cuando cambia la pregunta actual
    fn reset_card(&mut self) {
        self.selection.clear();
        self.revealed = false;
        self.message.clear();
    }

    /// Si la pregunta en pantalla ya no es la de la tarjeta, la tarjeta vuelve
    /// a estar sin responder. El mensaje del último acierto se conserva.
    fn sync_card(&mut self, question_id: Option<String>) {
        if self.card_question != question_id {
            self.selection.clear();
            self.revealed = false;
            self.card_question = question_id;
        }
    }
}

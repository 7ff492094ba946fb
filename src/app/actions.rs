use super::*;

impl QuizApp {
    // ----------- Estadísticas -----------

    /// Registra una respuesta en las estadísticas (práctica, falladas, aleatorio
    /// y, al entregar, cada posición del examen)
    pub fn record_answer(&mut self, is_correct: bool, question_id: &str) {
        self.dispatch(StatsAction::RecordAnswer {
            is_correct,
            question_id: question_id.to_string(),
        });
    }

    /// Sin comprobación de rango: un cursor fuera del banco se ve como "sin pregunta"
    pub fn set_practice_progress(&mut self, kind: QuestionKind, index: usize) {
        self.dispatch(StatsAction::SetPracticeProgress { kind, index });
    }

    pub fn toggle_favorite(&mut self, question_id: &str) {
        self.dispatch(StatsAction::ToggleFavorite {
            question_id: question_id.to_string(),
        });
    }

    // ----------- Tarjeta de pregunta (práctica / falladas / aleatorio) -----------

    /// Clic en una opción: en única y V/F se corrige al momento,
    /// en múltiple sólo se marca o desmarca
    pub fn practice_click(&mut self, question: &Question, label: char) {
        if self.revealed {
            return;
        }
        if question.kind.is_multi() {
            if let Some(pos) = self.selection.iter().position(|l| *l == label) {
                self.selection.remove(pos);
            } else {
                self.selection.push(label);
            }
        } else {
            self.selection = vec![label];
            self.practice_confirm(question);
        }
    }

    /// Corrige la selección actual y la registra en las estadísticas
    pub fn practice_confirm(&mut self, question: &Question) -> Option<Verdict> {
        if self.revealed || self.selection.is_empty() {
            return None;
        }
        let verdict = judge::evaluate(question, &self.selection);
        self.revealed = true;
        self.message = if verdict.is_correct {
            "✅ ¡Correcto!".into()
        } else {
            format!("❌ Incorrecto. Respuesta correcta: {}", question.answer)
        };
        self.record_answer(verdict.is_correct, &question.id);
        Some(verdict)
    }

    // ----------- Examen -----------

    /// Empieza un examen nuevo (descarta el anterior sin avisar)
    pub fn start_exam(&mut self) {
        self.exam.start(&self.bank, &mut self.rng);
        self.persist_exam();
        self.timer.arm(self.exam.generation(), Instant::now());
        self.exam_cursor = 0;
        self.confirm_submit = false;
        self.reset_card();
    }

    pub fn exam_record_answer(&mut self, position: usize, normalized: &str) -> bool {
        let accepted = self.exam.record_answer(position, normalized);
        if accepted {
            self.persist_exam();
        }
        accepted
    }

    /// Clic en una opción durante el examen. La respuesta se guarda al momento
    /// y puede cambiarse hasta entregar.
    pub fn exam_click(&mut self, label: char) {
        let position = self.exam_cursor;
        let Some(question) = self.exam.state().questions.get(position) else {
            return;
        };
        let kind = question.kind;
        let mut labels = match self.exam.answer_at(position) {
            Some(stored) if kind.is_multi() => judge::selected_labels(kind, stored),
            _ => vec![],
        };
        if let Some(pos) = labels.iter().position(|l| *l == label) {
            labels.remove(pos);
        } else {
            labels.push(label);
        }
        let normalized = judge::normalize_selection(kind, &labels);
        self.exam_record_answer(position, &normalized);
    }

    /// Entrega el examen y vuelca cada resultado en las estadísticas.
    /// Repetirlo no vuelve a puntuar.
    pub fn exam_submit(&mut self) -> ExamReport {
        let was_running = self.exam.timer_running();
        let stats = &mut self.stats;
        let report = self.exam.submit(|is_correct, id| {
            *stats = std::mem::take(stats).reduce(StatsAction::RecordAnswer {
                is_correct,
                question_id: id.to_string(),
            });
        });
        self.timer.cancel();
        self.confirm_submit = false;
        if was_running {
            self.persist_stats();
            self.persist_exam();
        }
        report
    }

    /// Un segundo de cuenta atrás
    pub fn exam_tick(&mut self) -> TickOutcome {
        let outcome = self.advance_exam_clock();
        if matches!(outcome, TickOutcome::Running { .. }) {
            self.persist_exam();
        }
        outcome
    }

    /// Avanza un segundo sin guardar el examen mientras sigue en curso;
    /// la entrega por tiempo sí se persiste al momento
    fn advance_exam_clock(&mut self) -> TickOutcome {
        let stats = &mut self.stats;
        let outcome = self.exam.tick(|is_correct, id| {
            *stats = std::mem::take(stats).reduce(StatsAction::RecordAnswer {
                is_correct,
                question_id: id.to_string(),
            });
        });
        match &outcome {
            TickOutcome::Idle | TickOutcome::Running { .. } => {}
            TickOutcome::Expired(report) => {
                self.timer.cancel();
                self.confirm_submit = false;
                self.message = format!("⏰ Tiempo agotado. Nota: {}", report.score);
                self.persist_stats();
                self.persist_exam();
            }
        }
        outcome
    }

    /// Convierte el tiempo real en ticks. Sólo corre con el examen activo y
    /// sin entregar; en cualquier otro caso cancela el temporizador.
    pub fn poll_exam_timer(&mut self, now: Instant) {
        if !self.exam.timer_running() {
            self.timer.cancel();
            return;
        }
        let generation = self.exam.generation();
        if self.timer.armed_for() != Some(generation) {
            // Examen reanudado tras recargar o al volver a la vista
            self.timer.arm(generation, now);
            return;
        }
        // Tras una parada larga llegan muchos ticks: se aplican todos y el
        // examen se guarda una sola vez
        let ticks = self.timer.poll(generation, now);
        let mut running = false;
        for _ in 0..ticks {
            running = matches!(self.advance_exam_clock(), TickOutcome::Running { .. });
            if !running {
                break;
            }
        }
        if running {
            self.persist_exam();
        }
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn until_next_tick(&self) -> Option<std::time::Duration> {
        self.timer.until_next_tick()
    }

    /// "Volver al inicio" desde el resultado del examen: queda inactivo
    pub fn return_home(&mut self) {
        self.timer.cancel();
        if self.exam.phase() == ExamPhase::Submitted {
            self.exam.return_home();
            self.persist_exam();
        }
        self.state = AppState::Home;
        self.reset_card();
    }

    /// Orden aleatorio nuevo para la práctica aleatoria
    pub fn reshuffle_random(&mut self) {
        let mut order: Vec<usize> = (0..self.bank.len()).collect();
        order.shuffle(&mut self.rng);
        self.random_order = order;
        self.random_cursor = 0;
        self.reset_card();
    }
}

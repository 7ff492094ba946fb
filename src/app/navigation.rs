use super::*;

impl QuizApp {
    /// Cambia de pantalla. Al salir del examen se cancela la cuenta atrás; si
    /// ya estaba entregado, además queda inactivo.
    pub fn navigate(&mut self, to: AppState) {
        if self.state == to {
            return;
        }
        if self.state == AppState::Exam {
            self.timer.cancel();
            if self.exam.phase() == ExamPhase::Submitted {
                self.exam.return_home();
                self.persist_exam();
            }
        }
        self.state = to;
        self.show_answer_card = false;
        self.confirm_submit = false;
        self.reset_card();

        match to {
            AppState::Random if self.random_order.len() != self.bank.len() => {
                self.reshuffle_random();
            }
            AppState::Wrong => self.clamp_wrong_cursor(),
            _ => {}
        }
    }

    // ----------- Práctica por categoría -----------

    pub fn select_practice_kind(&mut self, kind: QuestionKind) {
        self.practice_kind = kind;
        self.show_answer_card = false;
        self.reset_card();
    }

    pub fn practice_next(&mut self) {
        let cursor = self.stats.practice_cursor(self.practice_kind);
        if cursor + 1 < self.practice_questions().len() {
            self.set_practice_progress(self.practice_kind, cursor + 1);
            self.reset_card();
        }
    }

    pub fn practice_prev(&mut self) {
        let cursor = self.stats.practice_cursor(self.practice_kind);
        if cursor > 0 {
            self.set_practice_progress(self.practice_kind, cursor - 1);
            self.reset_card();
        }
    }

    pub fn practice_jump(&mut self, index: usize) {
        self.set_practice_progress(self.practice_kind, index);
        self.show_answer_card = false;
        self.reset_card();
    }

    // ----------- Falladas -----------

    /// Acertar una fallada la saca de la lista; el cursor no puede quedar fuera
    pub fn clamp_wrong_cursor(&mut self) {
        let len = self.wrong_questions().len();
        if self.wrong_cursor >= len {
            self.wrong_cursor = len.saturating_sub(1);
        }
        // Al acertar, la siguiente fallada ocupa el hueco de la anterior
        let current = self.current_wrong_question().map(|q| q.id.clone());
        self.sync_card(current);
    }

    pub fn wrong_next(&mut self) {
        if self.wrong_cursor + 1 < self.wrong_questions().len() {
            self.wrong_cursor += 1;
            self.reset_card();
            self.clamp_wrong_cursor();
        }
    }

    pub fn wrong_prev(&mut self) {
        if self.wrong_cursor > 0 {
            self.wrong_cursor -= 1;
            self.reset_card();
            self.clamp_wrong_cursor();
        }
    }

    pub fn wrong_jump(&mut self, index: usize) {
        self.wrong_cursor = index;
        self.clamp_wrong_cursor();
        self.show_answer_card = false;
        self.reset_card();
    }

    // ----------- Aleatorio -----------

    /// Siguiente pregunta del orden aleatorio; al terminar vuelve a empezar
    pub fn random_next(&mut self) {
        if self.random_order.is_empty() {
            return;
        }
        self.random_cursor = (self.random_cursor + 1) % self.random_order.len();
        self.reset_card();
    }

    // ----------- Examen -----------

    pub fn exam_go_to(&mut self, position: usize) {
        if position < self.exam.state().questions.len() {
            self.exam_cursor = position;
            self.show_answer_card = false;
        }
    }

    pub fn exam_next(&mut self) {
        self.exam_go_to(self.exam_cursor + 1);
    }

    pub fn exam_prev(&mut self) {
        if self.exam_cursor > 0 {
            self.exam_go_to(self.exam_cursor - 1);
        }
    }
}

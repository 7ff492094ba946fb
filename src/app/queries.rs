use super::*;

impl QuizApp {
    /// Preguntas de la categoría activa en práctica
    pub fn practice_questions(&self) -> Vec<&Question> {
        self.bank.by_kind(self.practice_kind)
    }

    /// `None` si el cursor guardado queda fuera de la lista
    pub fn current_practice_question(&self) -> Option<&Question> {
        let cursor = self.stats.practice_cursor(self.practice_kind);
        self.practice_questions().get(cursor).copied()
    }

    /// Falladas, en el orden del banco
    pub fn wrong_questions(&self) -> Vec<&Question> {
        self.bank
            .all()
            .iter()
            .filter(|q| self.stats.is_wrong(&q.id))
            .collect()
    }

    pub fn current_wrong_question(&self) -> Option<&Question> {
        self.wrong_questions().get(self.wrong_cursor).copied()
    }

    pub fn favorite_questions(&self) -> Vec<&Question> {
        self.bank
            .all()
            .iter()
            .filter(|q| self.stats.is_favorite(&q.id))
            .collect()
    }

    pub fn current_random_question(&self) -> Option<&Question> {
        let idx = *self.random_order.get(self.random_cursor)?;
        self.bank.all().get(idx)
    }

    pub fn current_exam_question(&self) -> Option<&Question> {
        self.exam.state().questions.get(self.exam_cursor)
    }

    /// Etiquetas guardadas para la posición actual del examen
    pub fn exam_selection(&self) -> Vec<char> {
        match (self.current_exam_question(), self.exam.answer_at(self.exam_cursor)) {
            (Some(q), Some(stored)) => judge::selected_labels(q.kind, stored),
            _ => vec![],
        }
    }
}

use super::*;
use crate::view_models::format_clock;

impl QuizApp {
    pub fn home_summary(&self) -> HomeSummary {
        HomeSummary {
            accuracy: self.stats.accuracy_percent(),
            answered: self.stats.total_answered,
            correct: self.stats.correct_count,
            coverage: self.stats.coverage_percent(self.bank.len()),
            bank_size: self.bank.len(),
            wrong_count: self.stats.wrong_question_ids.len(),
            favorite_count: self.stats.favorite_question_ids.len(),
        }
    }

    /// Hoja de respuestas del examen; tras entregar marca aciertos y fallos
    pub fn answer_cells(&self) -> Vec<AnswerCell> {
        let submitted = self.exam.phase() == ExamPhase::Submitted;
        (0..self.exam.state().questions.len())
            .map(|idx| AnswerCell {
                idx,
                answered: self.exam.answer_at(idx).is_some(),
                current: idx == self.exam_cursor,
                correct: submitted.then(|| self.exam.is_position_correct(idx)),
            })
            .collect()
    }

    pub fn result_summary(&self) -> ResultSummary {
        let report = self.exam.report();
        ResultSummary {
            score: report.score,
            max_score: report.max_score,
            passed: report.passed,
            correct: report.correct,
            total: report.total,
            elapsed: format_clock(report.elapsed_secs),
        }
    }

    /// Cuenta atrás formateada
    pub fn clock_label(&self) -> String {
        format_clock(self.exam.state().time_remaining)
    }
}

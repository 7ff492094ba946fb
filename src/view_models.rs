// src/view_models.rs

#[derive(Clone, Debug, PartialEq)]
pub struct HomeSummary {
    pub accuracy: u32, // %
    pub answered: u32,
    pub correct: u32,
    pub coverage: u32, // % del banco
    pub bank_size: usize,
    pub wrong_count: usize,
    pub favorite_count: usize,
}

/// Casilla de la hoja de respuestas
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerCell {
    pub idx: usize,
    pub answered: bool,
    pub current: bool,
    pub correct: Option<bool>, // sólo tras entregar
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummary {
    pub score: f64,
    pub max_score: f64,
    pub passed: bool,
    pub correct: usize,
    pub total: usize,
    pub elapsed: String,
}

impl HomeSummary {
    pub fn accuracy_label(&self) -> String {
        format!("{}% de aciertos ({} / {})", self.accuracy, self.correct, self.answered)
    }

    pub fn coverage_fraction(&self) -> f32 {
        (self.coverage.min(100) as f32) / 100.0
    }
}

impl AnswerCell {
    pub fn label(&self) -> String {
        (self.idx + 1).to_string()
    }
}

impl ResultSummary {
    pub fn headline(&self) -> String {
        format!("{} / {} puntos", self.score, self.max_score)
    }

    pub fn verdict(&self) -> &'static str {
        if self.passed {
            "🎉 ¡Aprobado!"
        } else {
            "💪 Hay que seguir practicando"
        }
    }
}

/// Segundos a "m:ss"
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(5400), "90:00");
    }
}

// src/config.rs

use crate::model::QuestionKind;
use serde::{Deserialize, Serialize};

/// Cupo de una categoría: cuántas preguntas se sacan y cuánto vale cada una
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryQuota {
    pub kind: QuestionKind,
    pub count: usize,
    pub points: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExamConfig {
    pub total_questions: usize,
    pub time_limit_secs: u32,
    pub pass_score: f64,
    pub categories: Vec<CategoryQuota>,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            total_questions: 190,
            time_limit_secs: 90 * 60,
            pass_score: 60.0,
            categories: vec![
                CategoryQuota { kind: QuestionKind::TrueFalse, count: 40, points: 0.5 },
                CategoryQuota { kind: QuestionKind::SingleChoice, count: 140, points: 0.5 },
                CategoryQuota { kind: QuestionKind::MultiChoice, count: 10, points: 1.0 },
            ],
        }
    }
}

impl ExamConfig {
    /// Configuración embebida; si el YAML no es válido se usan los valores por defecto
    pub fn embedded() -> Self {
        match serde_yaml::from_str::<ExamConfig>(include_str!("data/exam_config.yaml")) {
            Ok(config) => {
                let drawn: usize = config.categories.iter().map(|c| c.count).sum();
                if drawn != config.total_questions {
                    log::warn!(
                        "exam config: total_questions={} but categories add up to {}",
                        config.total_questions,
                        drawn
                    );
                }
                config
            }
            Err(e) => {
                log::warn!("invalid embedded exam config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Puntos por acierto en una categoría (0 si no está configurada)
    pub fn points_for(&self, kind: QuestionKind) -> f64 {
        self.categories
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.points)
            .unwrap_or(0.0)
    }

    /// Puntuación máxima con un banco suficiente
    pub fn nominal_max_score(&self) -> f64 {
        self.categories
            .iter()
            .map(|c| c.count as f64 * c.points)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = ExamConfig::embedded();
        assert_eq!(config, ExamConfig::default());
        assert_eq!(config.nominal_max_score(), 100.0);
        assert_eq!(config.points_for(QuestionKind::MultiChoice), 1.0);
        assert_eq!(config.points_for(QuestionKind::TrueFalse), 0.5);
    }
}

// src/data.rs

use crate::model::{Question, QuestionKind};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("no se pudo parsear el banco de preguntas: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("id de pregunta duplicado: {0}")]
    DuplicateId(String),
    #[error("la pregunta {0} no tiene opciones")]
    NoOptions(String),
}

/// Banco de preguntas inmutable durante toda la ejecución
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id.as_str()) {
                return Err(BankError::DuplicateId(q.id.clone()));
            }
            if q.options.is_empty() {
                return Err(BankError::NoOptions(q.id.clone()));
            }
        }
        Ok(Self { questions })
    }

    /// Carga el banco desde un documento YAML (lista de preguntas)
    pub fn from_yaml(text: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_yaml::from_str(text)?;
        Self::new(questions)
    }

    /// Carga el banco embebido en el binario
    pub fn embedded() -> Result<Self, BankError> {
        Self::from_yaml(include_str!("data/questions.yaml"))
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Preguntas de una categoría, en el orden del banco
    pub fn by_kind(&self, kind: QuestionKind) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.kind == kind).collect()
    }
}

/// Banco sintético para tests: `n` preguntas de cada categoría pedida
#[cfg(test)]
pub(crate) fn sample_bank(true_false: usize, single: usize, multi: usize) -> QuestionBank {
    let mut questions = Vec::new();
    let mut push = |kind: QuestionKind, n: usize, prefix: &str, answer: &str| {
        for i in 0..n {
            questions.push(Question {
                id: format!("{prefix}-{i}"),
                kind,
                prompt: format!("{prefix} {i}"),
                options: vec!["A. uno".into(), "B. dos".into(), "C. tres".into()],
                answer: answer.to_string(),
                explanation: String::new(),
            });
        }
    };
    push(QuestionKind::TrueFalse, true_false, "tf", "A");
    push(QuestionKind::SingleChoice, single, "sc", "B");
    push(QuestionKind::MultiChoice, multi, "mc", "A, C");
    QuestionBank { questions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_true_false_spellings_share_one_category() {
        let yaml = r#"
- question_id: "1"
  type: 判断题
  question: "Rust tiene recolector de basura."
  options: ["A. Verdadero", "B. Falso"]
  answer: "B"
- id: "2"
  type: true_false
  prompt: "Cargo es el gestor de paquetes de Rust."
  options: ["A. Verdadero", "B. Falso"]
  answer: "A"
  explanation: "Cargo compila y gestiona dependencias."
- id: "3"
  type: 单选题
  prompt: "¿Qué palabra clave declara una variable?"
  options: ["A. let", "B. var", "C. def"]
  answer: "A"
"#;
        let bank = QuestionBank::from_yaml(yaml).expect("bank ok");
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.by_kind(QuestionKind::TrueFalse).len(), 2);
        assert_eq!(bank.by_kind(QuestionKind::SingleChoice).len(), 1);
        assert_eq!(bank.get("1").map(|q| q.explanation.as_str()), Some(""));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = r#"
- id: "1"
  type: true_false
  prompt: "x"
  options: ["A. V", "B. F"]
  answer: "A"
- id: "1"
  type: true_false
  prompt: "y"
  options: ["A. V", "B. F"]
  answer: "B"
"#;
        assert!(matches!(
            QuestionBank::from_yaml(yaml),
            Err(BankError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn embedded_bank_parses() {
        let bank = QuestionBank::embedded().expect("embedded bank ok");
        assert!(!bank.is_empty());
        for kind in QuestionKind::ALL {
            assert!(!bank.by_kind(kind).is_empty());
        }
    }
}

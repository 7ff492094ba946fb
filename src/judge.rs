// src/judge.rs
//
// Corrección de respuestas: convierte una selección de etiquetas en la
// respuesta normalizada que se compara con `Question::answer`.

use crate::model::{Question, QuestionKind};

/// Resultado de corregir una selección
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub is_correct: bool,
    pub normalized: String,
}

/// La etiqueta de una opción es su primer carácter ("A. ..." -> 'A')
pub fn option_label(option: &str) -> Option<char> {
    option.trim_start().chars().next()
}

/// Forma canónica de una selección.
/// - Única / V-F: la primera etiqueta seleccionada.
/// - Múltiple: etiquetas sin repetir, ordenadas y unidas con ", ".
pub fn normalize_selection(kind: QuestionKind, labels: &[char]) -> String {
    if kind.is_multi() {
        let mut sorted: Vec<char> = labels.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        sorted
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        labels.first().map(|c| c.to_string()).unwrap_or_default()
    }
}

pub fn evaluate(question: &Question, labels: &[char]) -> Verdict {
    let normalized = normalize_selection(question.kind, labels);
    Verdict {
        is_correct: !normalized.is_empty() && normalized == question.answer,
        normalized,
    }
}

/// Recupera las etiquetas de una respuesta ya guardada (para volver a pintarla)
pub fn selected_labels(kind: QuestionKind, normalized: &str) -> Vec<char> {
    if kind.is_multi() {
        normalized
            .split(',')
            .filter_map(|part| part.trim().chars().next())
            .collect()
    } else {
        normalized.trim().chars().next().into_iter().collect()
    }
}

/// ¿Forma parte la etiqueta de la respuesta correcta?
pub fn is_correct_label(question: &Question, label: char) -> bool {
    selected_labels(question.kind, &question.answer).contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi() -> Question {
        Question {
            id: "m1".into(),
            kind: QuestionKind::MultiChoice,
            prompt: "¿Cuáles son lenguajes compilados?".into(),
            options: vec![
                "A. Rust".into(),
                "B. Bash".into(),
                "C. C".into(),
                "D. Python".into(),
            ],
            answer: "A, C".into(),
            explanation: String::new(),
        }
    }

    #[test]
    fn multi_selection_is_order_independent() {
        let q = multi();
        let sorted = normalize_selection(q.kind, &['A', 'C']);
        let reversed = normalize_selection(q.kind, &['C', 'A']);
        let repeated = normalize_selection(q.kind, &['C', 'A', 'C']);
        assert_eq!(sorted, "A, C");
        assert_eq!(reversed, sorted);
        assert_eq!(repeated, sorted);
        assert!(evaluate(&q, &['C', 'A']).is_correct);
    }

    #[test]
    fn partial_multi_selection_is_wrong() {
        let v = evaluate(&multi(), &['A']);
        assert!(!v.is_correct);
        assert_eq!(v.normalized, "A");
    }

    #[test]
    fn single_choice_uses_first_label() {
        assert_eq!(normalize_selection(QuestionKind::SingleChoice, &['B', 'C']), "B");
        assert_eq!(normalize_selection(QuestionKind::TrueFalse, &[]), "");
    }

    #[test]
    fn stored_answers_split_back_into_labels() {
        assert_eq!(selected_labels(QuestionKind::MultiChoice, "A, C"), vec!['A', 'C']);
        assert_eq!(selected_labels(QuestionKind::SingleChoice, "B"), vec!['B']);
        assert!(is_correct_label(&multi(), 'C'));
        assert!(!is_correct_label(&multi(), 'B'));
    }

    #[test]
    fn option_label_is_first_character() {
        assert_eq!(option_label("A. Rust"), Some('A'));
        assert_eq!(option_label(""), None);
    }
}

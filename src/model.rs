use serde::{Deserialize, Serialize};

/// Categoría de pregunta. Las dos grafías históricas de "verdadero/falso"
/// se normalizan a `TrueFalse` al cargar el banco.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum QuestionKind {
    #[serde(rename = "single_choice", alias = "单选题", alias = "SingleChoice")]
    SingleChoice,
    #[serde(rename = "multi_choice", alias = "多选题", alias = "MultiChoice")]
    MultiChoice,
    #[serde(rename = "true_false", alias = "判断题", alias = "TrueFalse")]
    TrueFalse,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 3] = [
        QuestionKind::SingleChoice,
        QuestionKind::MultiChoice,
        QuestionKind::TrueFalse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "Opción única",
            QuestionKind::MultiChoice => "Opción múltiple",
            QuestionKind::TrueFalse => "Verdadero / Falso",
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, QuestionKind::MultiChoice)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    #[serde(alias = "question_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String, // "A" o, en múltiple, "A, C"
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Etiquetas de las opciones (primer carácter de cada opción)
    pub fn labels(&self) -> Vec<char> {
        self.options
            .iter()
            .filter_map(|o| crate::judge::option_label(o))
            .collect()
    }
}

/// Pantalla activa de la interfaz
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Home,
    Practice,
    Exam,
    Wrong,
    Random,
}

impl AppState {
    pub const NAV: [AppState; 5] = [
        AppState::Home,
        AppState::Practice,
        AppState::Exam,
        AppState::Wrong,
        AppState::Random,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AppState::Home => "🏠 Inicio",
            AppState::Practice => "📚 Práctica",
            AppState::Exam => "⏱ Examen",
            AppState::Wrong => "❌ Falladas",
            AppState::Random => "🔀 Aleatorio",
        }
    }
}

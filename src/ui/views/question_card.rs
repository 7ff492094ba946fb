use crate::judge::{is_correct_label, option_label};
use crate::model::{Question, QuestionKind};
use crate::ui::helpers::{OptionLook, option_button};
use egui::{Button, Color32, RichText, Ui};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Práctica: se corrige al responder
    Answering,
    /// Examen: se guarda la respuesta sin mostrar si es correcta
    Exam,
    /// Revisión tras entregar: sólo lectura
    Review,
}

#[derive(Default)]
pub struct CardResponse {
    pub clicked: Option<char>,
    pub confirm: bool,
    pub toggle_favorite: bool,
}

fn kind_color(kind: QuestionKind) -> Color32 {
    match kind {
        QuestionKind::SingleChoice => Color32::from_rgb(37, 99, 235),
        QuestionKind::MultiChoice => Color32::from_rgb(147, 51, 234),
        QuestionKind::TrueFalse => Color32::from_rgb(5, 150, 105),
    }
}

pub fn question_card(
    ui: &mut Ui,
    question: &Question,
    selected: &[char],
    revealed: bool,
    favorite: bool,
    mode: CardMode,
) -> CardResponse {
    let mut response = CardResponse::default();
    let width = ui.available_width();

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(question.kind.label())
                .color(kind_color(question.kind))
                .strong(),
        );
        ui.label(RichText::new(format!("ID: {}", question.id)).weak());
        let star = if favorite { "★ Favorita" } else { "☆ Favorita" };
        if ui.button(star).clicked() {
            response.toggle_favorite = true;
        }
    });
    ui.add_space(8.0);
    ui.label(RichText::new(&question.prompt).heading());
    ui.add_space(10.0);

    for option in &question.options {
        let Some(label) = option_label(option) else {
            continue;
        };
        let chosen = selected.contains(&label);
        let look = if revealed {
            if is_correct_label(question, label) {
                OptionLook::Correct
            } else if chosen {
                OptionLook::Wrong
            } else {
                OptionLook::Faded
            }
        } else if chosen {
            OptionLook::Selected
        } else {
            OptionLook::Idle
        };
        if option_button(ui, option, look, width) && mode != CardMode::Review {
            response.clicked = Some(label);
        }
        ui.add_space(4.0);
    }

    if question.kind.is_multi() && !revealed && mode == CardMode::Answering {
        ui.add_space(6.0);
        let confirm = ui.add_enabled(
            !selected.is_empty(),
            Button::new("Confirmar respuesta").min_size(egui::vec2(width, 36.0)),
        );
        if confirm.clicked() {
            response.confirm = true;
        }
    }

    if revealed {
        ui.add_space(10.0);
        ui.separator();
        ui.label(
            RichText::new(format!("Respuesta correcta: {}", question.answer))
                .color(Color32::from_rgb(34, 197, 94))
                .strong(),
        );
        let explanation = if question.explanation.is_empty() {
            "Esta pregunta no tiene explicación."
        } else {
            question.explanation.as_str()
        };
        ui.label(RichText::new(explanation).italics());
    }

    response
}

// src/ui/helpers.rs
use crate::view_models::AnswerCell;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Estado visual de una opción
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OptionLook {
    Idle,
    Selected,
    Correct,
    Wrong,
    Faded,
}

/// Botón de opción a ancho completo con el color de su estado
pub fn option_button(ui: &mut Ui, text: &str, look: OptionLook, width: f32) -> bool {
    let (fill, color) = match look {
        OptionLook::Idle => (ui.visuals().widgets.inactive.bg_fill, ui.visuals().text_color()),
        OptionLook::Selected => (Color32::from_rgb(79, 70, 229), Color32::WHITE),
        OptionLook::Correct => (Color32::from_rgb(34, 197, 94), Color32::WHITE),
        OptionLook::Wrong => (Color32::from_rgb(239, 68, 68), Color32::WHITE),
        OptionLook::Faded => (ui.visuals().faint_bg_color, Color32::GRAY),
    };
    let mark = match look {
        OptionLook::Correct => "  ✔",
        OptionLook::Wrong => "  ✖",
        _ => "",
    };
    ui.add(
        Button::new(RichText::new(format!("{text}{mark}")).color(color))
            .fill(fill)
            .min_size(Vec2::new(width, 36.0)),
    )
    .clicked()
}

/// Hoja de respuestas: una casilla por pregunta. Devuelve la pulsada.
pub fn answer_grid(ui: &mut Ui, cells: &[AnswerCell]) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for cell in cells {
            let fill = match (cell.correct, cell.answered) {
                (Some(true), _) => Color32::from_rgb(34, 197, 94),
                (Some(false), _) => Color32::from_rgb(239, 68, 68),
                (None, true) => Color32::from_rgb(199, 210, 254),
                (None, false) => ui.visuals().faint_bg_color,
            };
            let mut text = RichText::new(cell.label()).small();
            if cell.current {
                text = text.strong().underline();
            }
            if ui
                .add(Button::new(text).fill(fill).min_size(Vec2::new(32.0, 28.0)))
                .clicked()
            {
                clicked = Some(cell.idx);
            }
        }
    });
    clicked
}

/// Rejilla de números para saltar a una pregunta de una lista
pub fn index_grid(ui: &mut Ui, len: usize, current: usize) -> Option<usize> {
    let cells: Vec<AnswerCell> = (0..len)
        .map(|idx| AnswerCell {
            idx,
            answered: false,
            current: idx == current,
            correct: None,
        })
        .collect();
    answer_grid(ui, &cells)
}

use crate::QuizApp;
use crate::model::QuestionKind;
use crate::ui::helpers::index_grid;
use crate::ui::layout::{simple_panel, two_button_row};
use crate::ui::views::question_card::{CardMode, question_card};
use egui::Context;

pub fn ui_practice(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 720.0, |ui| {
        // Selector de categoría
        ui.horizontal(|ui| {
            for kind in QuestionKind::ALL {
                if ui
                    .selectable_label(app.practice_kind == kind, kind.label())
                    .clicked()
                {
                    app.select_practice_kind(kind);
                }
            }
        });
        ui.add_space(8.0);

        let total = app.practice_questions().len();
        let cursor = app.stats.practice_cursor(app.practice_kind);
        ui.horizontal(|ui| {
            ui.label(format!("{} / {}", (cursor + 1).min(total), total));
            if ui.button("🔢 Hoja de respuestas").clicked() {
                app.show_answer_card = !app.show_answer_card;
            }
        });

        if app.show_answer_card {
            if let Some(idx) = index_grid(ui, total, cursor) {
                app.practice_jump(idx);
            }
            ui.separator();
        }

        let Some(question) = app.current_practice_question().cloned() else {
            ui.add_space(20.0);
            ui.label("No hay preguntas de este tipo.");
            return;
        };

        let favorite = app.stats.is_favorite(&question.id);
        let card = question_card(
            ui,
            &question,
            &app.selection,
            app.revealed,
            favorite,
            CardMode::Answering,
        );
        if card.toggle_favorite {
            app.toggle_favorite(&question.id);
        }
        if let Some(label) = card.clicked {
            app.practice_click(&question, label);
        }
        if card.confirm {
            app.practice_confirm(&question);
        }

        ui.add_space(12.0);
        let width = ui.available_width();
        let (prev, next) = two_button_row(
            ui,
            width,
            ("⬅ Anterior", cursor > 0),
            ("Siguiente ➡", cursor + 1 < total),
        );
        if prev {
            app.practice_prev();
        }
        if next {
            app.practice_next();
        }
    });
}

use crate::QuizApp;
use crate::model::AppState;
use crate::ui::helpers::index_grid;
use crate::ui::layout::{simple_panel, two_button_row};
use crate::ui::views::question_card::{CardMode, question_card};
use egui::Context;

pub fn ui_wrong(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 720.0, |ui| {
        app.clamp_wrong_cursor();
        let total = app.wrong_questions().len();

        let Some(question) = app.current_wrong_question().cloned() else {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.heading("👻 No tienes preguntas falladas");
                ui.label("¡Sigue así!");
                ui.add_space(10.0);
                if ui.button("🏠 Volver al inicio").clicked() {
                    app.navigate(AppState::Home);
                }
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.label(format!("Falladas: {} / {}", app.wrong_cursor + 1, total));
            if ui.button("🔢 Hoja de respuestas").clicked() {
                app.show_answer_card = !app.show_answer_card;
            }
        });
        if app.show_answer_card {
            if let Some(idx) = index_grid(ui, total, app.wrong_cursor) {
                app.wrong_jump(idx);
            }
            ui.separator();
        }

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
        // Si se acierta, la pregunta sale de la lista en el siguiente frame
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
            ("⬅ Anterior", app.wrong_cursor > 0),
            ("Siguiente ➡", app.wrong_cursor + 1 < total),
        );
        if prev {
            app.wrong_prev();
        }
        if next {
            app.wrong_next();
        }
    });
}

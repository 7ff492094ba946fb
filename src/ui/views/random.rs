use crate::QuizApp;
use crate::ui::layout::simple_panel;
use crate::ui::views::question_card::{CardMode, question_card};
use egui::{Button, Context};

pub fn ui_random(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 720.0, |ui| {
        ui.heading("🔀 Práctica aleatoria");
        ui.add_space(8.0);

        let Some(question) = app.current_random_question().cloned() else {
            ui.label("El banco de preguntas está vacío.");
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
        if ui
            .add(Button::new("🎲 Otra pregunta").min_size(egui::vec2(width, 40.0)))
            .clicked()
        {
            app.random_next();
        }
    });
}

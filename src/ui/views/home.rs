use crate::QuizApp;
use crate::model::AppState;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::simple_panel;
use egui::{Context, ProgressBar, RichText};

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 640.0, |ui| {
        let summary = app.home_summary();

        ui.vertical_centered(|ui| {
            ui.heading("Entrenador de examen");
            ui.add_space(12.0);
            ui.label(RichText::new(summary.accuracy_label()).size(20.0).strong());
            ui.add_space(6.0);
            ui.add(
                ProgressBar::new(summary.coverage_fraction())
                    .text(format!("{}% del banco ({} preguntas)", summary.coverage, summary.bank_size)),
            );
            ui.add_space(6.0);
            ui.label(format!(
                "❌ {} falladas   ·   ★ {} favoritas",
                summary.wrong_count, summary.favorite_count
            ));
        });

        ui.add_space(18.0);
        let btn_w = ui.available_width();
        let btn_h = 40.0;
        if big_list_button(ui, "📚 Práctica por categorías".into(), btn_w, btn_h, true) {
            app.navigate(AppState::Practice);
        }
        if big_list_button(ui, "⏱ Examen simulado".into(), btn_w, btn_h, true) {
            app.navigate(AppState::Exam);
        }
        let wrong_label = format!("❌ Repasar falladas ({})", summary.wrong_count);
        if big_list_button(ui, wrong_label, btn_w, btn_h, summary.wrong_count > 0) {
            app.navigate(AppState::Wrong);
        }
        if big_list_button(ui, "🔀 Práctica aleatoria".into(), btn_w, btn_h, true) {
            app.navigate(AppState::Random);
        }

        // ----------- FAVORITAS -----------
        let favorites: Vec<(String, String)> = app
            .favorite_questions()
            .into_iter()
            .map(|q| (q.id.clone(), q.prompt.clone()))
            .collect();
        if !favorites.is_empty() {
            ui.add_space(18.0);
            ui.heading("★ Favoritas");
            for (id, prompt) in favorites {
                ui.horizontal(|ui| {
                    if ui.small_button("✖").on_hover_text("Quitar de favoritas").clicked() {
                        app.toggle_favorite(&id);
                    }
                    ui.label(prompt);
                });
            }
        }
    });
}

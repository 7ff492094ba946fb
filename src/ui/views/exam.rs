use crate::QuizApp;
use crate::exam::ExamPhase;
use crate::ui::helpers::answer_grid;
use crate::ui::layout::{simple_panel, two_button_row};
use crate::ui::views::question_card::{CardMode, question_card};
use egui::{Button, Color32, Context, RichText, Ui};

pub fn ui_exam(app: &mut QuizApp, ctx: &Context) {
    match app.exam.phase() {
        ExamPhase::NotStarted | ExamPhase::Inactive => ui_exam_start(app, ctx),
        ExamPhase::Active => {
            ui_exam_active(app, ctx);
            ui_confirm_submit(app, ctx);
        }
        ExamPhase::Submitted => ui_exam_result(app, ctx),
    }
}

fn ui_exam_start(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 560.0, |ui| {
        let config = app.exam.config().clone();
        ui.vertical_centered(|ui| {
            ui.heading("⏱ Examen simulado");
            ui.add_space(12.0);
            ui.label(format!(
                "{} preguntas · {} minutos · aprobado con {} puntos",
                config.total_questions,
                config.time_limit_secs / 60,
                config.pass_score
            ));
            ui.add_space(8.0);
            for quota in &config.categories {
                ui.label(format!(
                    "{}: {} × {} puntos",
                    quota.kind.label(),
                    quota.count,
                    quota.points
                ));
            }
            ui.add_space(20.0);
            let width = ui.available_width();
            if ui
                .add_enabled(
                    !app.bank.is_empty(),
                    Button::new("▶ Empezar examen").min_size(egui::vec2(width, 44.0)),
                )
                .clicked()
            {
                app.start_exam();
            }
        });
    });
}

fn ui_exam_active(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 760.0, |ui| {
        let total = app.exam.state().questions.len();
        let remaining = app.exam.state().time_remaining;

        // Cabecera: reloj y progreso
        ui.horizontal(|ui| {
            let clock_color = if remaining < 300 {
                Color32::from_rgb(239, 68, 68)
            } else {
                ui.visuals().text_color()
            };
            ui.label(
                RichText::new(format!("⏱ {}", app.clock_label()))
                    .size(20.0)
                    .color(clock_color)
                    .strong(),
            );
            ui.separator();
            ui.label(format!(
                "Pregunta {} / {} · sin responder: {}",
                app.exam_cursor + 1,
                total,
                app.exam.unanswered_count()
            ));
            if ui.button("🔢 Hoja de respuestas").clicked() {
                app.show_answer_card = !app.show_answer_card;
            }
        });
        ui.separator();

        if app.show_answer_card {
            let cells = app.answer_cells();
            if let Some(idx) = answer_grid(ui, &cells) {
                app.exam_go_to(idx);
            }
            ui.separator();
        }

        let Some(question) = app.current_exam_question().cloned() else {
            return;
        };
        let selection = app.exam_selection();
        let favorite = app.stats.is_favorite(&question.id);
        let card = question_card(ui, &question, &selection, false, favorite, CardMode::Exam);
        if card.toggle_favorite {
            app.toggle_favorite(&question.id);
        }
        if let Some(label) = card.clicked {
            app.exam_click(label);
        }

        ui.add_space(12.0);
        let width = ui.available_width();
        let (prev, next) = two_button_row(
            ui,
            width,
            ("⬅ Anterior", app.exam_cursor > 0),
            ("Siguiente ➡", app.exam_cursor + 1 < total),
        );
        if prev {
            app.exam_prev();
        }
        if next {
            app.exam_next();
        }

        ui.add_space(8.0);
        if ui
            .add(Button::new("📤 Entregar examen").min_size(egui::vec2(width, 40.0)))
            .clicked()
        {
            app.confirm_submit = true;
        }
    });
}

/// Diálogo de confirmación antes de entregar
fn ui_confirm_submit(app: &mut QuizApp, ctx: &Context) {
    if !app.confirm_submit {
        return;
    }
    let unanswered = app.exam.unanswered_count();
    egui::Window::new("¿Entregar examen?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            if unanswered > 0 {
                ui.label(format!("Quedan {unanswered} preguntas sin responder."));
            } else {
                ui.label("Has respondido todas las preguntas.");
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Entregar").clicked() {
                    let report = app.exam_submit();
                    app.message = format!("📤 Examen entregado. Nota: {}", report.score);
                }
                if ui.button("Seguir respondiendo").clicked() {
                    app.confirm_submit = false;
                }
            });
        });
}

fn ui_exam_result(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 760.0, |ui| {
        let summary = app.result_summary();
        ui.vertical_centered(|ui| {
            ui.heading(summary.verdict());
            ui.add_space(8.0);
            ui.label(RichText::new(summary.headline()).size(24.0).strong());
            ui.label(format!(
                "{} / {} correctas · tiempo empleado {}",
                summary.correct, summary.total, summary.elapsed
            ));
            ui.add_space(12.0);
            let width = ui.available_width();
            if ui
                .add(Button::new("🏠 Volver al inicio").min_size(egui::vec2(width, 40.0)))
                .clicked()
            {
                app.return_home();
            }
        });

        ui.add_space(12.0);
        ui.separator();
        let cells = app.answer_cells();
        if let Some(idx) = answer_grid(ui, &cells) {
            app.exam_go_to(idx);
        }
        ui.separator();
        ui_review_current(app, ui);
    });
}

/// Revisión de la pregunta seleccionada, con la respuesta dada y la correcta
fn ui_review_current(app: &mut QuizApp, ui: &mut Ui) {
    let Some(question) = app.current_exam_question().cloned() else {
        return;
    };
    let given = app
        .exam
        .answer_at(app.exam_cursor)
        .unwrap_or("(sin responder)")
        .to_string();
    ui.label(RichText::new(format!("Tu respuesta: {given}")).strong());
    ui.add_space(4.0);

    let selection = app.exam_selection();
    let favorite = app.stats.is_favorite(&question.id);
    let card = question_card(ui, &question, &selection, true, favorite, CardMode::Review);
    if card.toggle_favorite {
        app.toggle_favorite(&question.id);
    }

    ui.add_space(12.0);
    let total = app.exam.state().questions.len();
    let width = ui.available_width();
    let (prev, next) = two_button_row(
        ui,
        width,
        ("⬅ Anterior", app.exam_cursor > 0),
        ("Siguiente ➡", app.exam_cursor + 1 < total),
    );
    if prev {
        app.exam_prev();
    }
    if next {
        app.exam_next();
    }
}

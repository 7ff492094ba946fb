use crate::QuizApp;
use crate::model::AppState;
use egui::{CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            for target in AppState::NAV {
                if ui
                    .selectable_label(app.state == target, target.title())
                    .clicked()
                {
                    app.navigate(target);
                }
            }
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    app.prefs.dark_mode = true;
                    apply_theme(ctx, true);
                }
                if ui.button("☀ Modo claro").clicked() {
                    app.prefs.dark_mode = false;
                    apply_theme(ctx, false);
                }
                if !app.message.is_empty() {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        ui.label(&app.message);
                    });
                }
            },
        );
    });
}

pub fn apply_theme(ctx: &Context, dark: bool) {
    if dark {
        ctx.set_visuals(Visuals::dark());
    } else {
        ctx.set_visuals(Visuals::light());
    }
}

/// Panel central con scroll y anchura máxima
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let w = ui.available_width().min(max_width);
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, egui::Button::new(left.0).min_size(egui::vec2(btn_w, 36.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, egui::Button::new(right.0).min_size(egui::vec2(btn_w, 36.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}

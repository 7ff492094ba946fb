mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::{Duration, Instant};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // La cuenta atrás sólo avanza mientras se ve el examen
        if self.state == AppState::Exam {
            self.poll_exam_timer(Instant::now());
            if self.timer_armed() {
                let wait = self.until_next_tick().unwrap_or(Duration::from_secs(1));
                ctx.request_repaint_after(wait);
            }
        }

        // BARRA SUPERIOR DE NAVEGACIÓN
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Practice => views::practice::ui_practice(self, ctx),
            AppState::Exam => views::exam::ui_exam(self, ctx),
            AppState::Wrong => views::wrong::ui_wrong(self, ctx),
            AppState::Random => views::random::ui_random(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Sólo las preferencias de interfaz; estadísticas y examen ya se
        // guardan en cada cambio
        set_value(storage, APP_KEY, &self.prefs);
    }
}

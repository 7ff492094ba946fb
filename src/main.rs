use eframe::{APP_KEY, get_value};
use exam_trainer::ui::layout::apply_theme;
use exam_trainer::{QuizApp, UiPrefs};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Entrenador de examen",
        options,
        Box::new(|cc| {
            let mut app = QuizApp::from_defaults();
            // Preferencias de interfaz guardadas por eframe
            if let Some(storage) = cc.storage {
                if let Some(prefs) = get_value::<UiPrefs>(storage, APP_KEY) {
                    app.prefs = prefs;
                }
            }
            apply_theme(&cc.egui_ctx, app.prefs.dark_mode);
            Ok(Box::new(app))
        }),
    )
}

use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            match app.load_error.clone() {
                Some(message) => {
                    ui.add_space(30.0);
                    ui.label(RichText::new(format!("⚠ {message}")).heading().color(egui::Color32::YELLOW));
                    ui.add_space(20.0);
                    if ui.button("🔙 Volver").clicked() {
                        app.load_error = None;
                        app.back_to_intro();
                    }
                }
                None => {
                    ui.add_space(60.0);
                    ui.label(RichText::new("Cargando…").heading());
                    ui.add_space(20.0);
                    ui.add(Spinner::new());
                }
            }
        });
    });
}

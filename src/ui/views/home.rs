use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, TextEdit};

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 460.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("👋 ¡Bienvenido a Campus Quiz!");
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Servidor: {}", app.api.config().api_base))
                    .small()
                    .weak(),
            );
        });
        ui.add_space(18.0);

        let field_w = (ui.available_width() - 140.0).max(160.0);

        // ----------- ABRIR QUIZ -----------
        ui.label("Abrir un quiz por su identificador");
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut app.settings.last_quiz_id)
                    .hint_text("id del quiz")
                    .desired_width(field_w),
            );
            if ui.button("▶ Abrir quiz").clicked() {
                let quiz_id = app.settings.last_quiz_id.clone();
                app.open_quiz(&quiz_id);
            }
        });
        ui.add_space(8.0);

        ui.label("…o el quiz de una lección");
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut app.settings.last_lesson_id)
                    .hint_text("id de la lección")
                    .desired_width(field_w),
            );
            if ui.button("📚 Abrir lección").clicked() {
                let lesson_id = app.settings.last_lesson_id.clone();
                app.open_lesson_quiz(&lesson_id);
            }
        });
        ui.add_space(14.0);
        ui.separator();

        // ----------- INTENTOS (revisión / corrección) -----------
        ui.label("Ver o corregir un intento");
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut app.attempt_id_input)
                    .hint_text("id del intento")
                    .desired_width(field_w - 90.0),
            );
            if ui.button("🔍 Revisar").clicked() {
                let attempt_id = app.attempt_id_input.clone();
                app.open_review(&attempt_id);
            }
            if ui.button("📝 Corregir").clicked() {
                let attempt_id = app.attempt_id_input.clone();
                app.open_grading(&attempt_id);
            }
        });
        ui.add_space(14.0);
        ui.separator();
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            let btn_w = (ui.available_width() * 0.8).clamp(160.0, 360.0);
            if big_list_button(ui, "🎮 Probar quiz de demostración", btn_w, 36.0, true) {
                app.open_demo();
            }
            ui.add_space(5.0);
            #[cfg(not(target_arch = "wasm32"))]
            if big_list_button(ui, "⬆ Subir recursos de lección", btn_w, 36.0, true) {
                app.open_uploads();
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                ui.add_space(5.0);
                if big_list_button(ui, "Salir", btn_w, 36.0, true) {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        });
    });
}

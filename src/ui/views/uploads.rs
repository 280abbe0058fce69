use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, TextEdit};

pub fn ui_uploads(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 340.0, 560.0, |ui| {
        ui.heading("⬆ Recursos de lección");
        ui.add_space(12.0);

        #[cfg(target_arch = "wasm32")]
        {
            ui.label("La subida de archivos solo está disponible en la versión de escritorio.");
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::model::AssetKind;

            egui::Grid::new("upload_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Lección");
                ui.add(TextEdit::singleline(&mut app.uploads.lesson_id).hint_text("id de la lección"));
                ui.end_row();

                ui.label("Tipo");
                egui::ComboBox::from_id_salt("asset_kind")
                    .selected_text(app.uploads.kind.label())
                    .show_ui(ui, |ui| {
                        for kind in AssetKind::ALL {
                            ui.selectable_value(&mut app.uploads.kind, kind, kind.label());
                        }
                    });
                ui.end_row();

                ui.label("Archivo");
                ui.add(
                    TextEdit::singleline(&mut app.uploads.path)
                        .hint_text("/ruta/al/archivo.mp4")
                        .desired_width(320.0),
                );
                ui.end_row();
            });
            ui.add_space(12.0);

            let busy = app.api.is_busy();
            if ui.add_enabled(!busy, egui::Button::new("Subir")).clicked() {
                app.upload_asset();
            }
        }

        if let Some(url) = &app.uploads.last_url {
            ui.add_space(10.0);
            ui.label("Último archivo subido:");
            ui.label(RichText::new(url).monospace());
        }
        ui.add_space(12.0);
        if ui.button("🔙 Volver").clicked() {
            app.open_home();
        }
    });
}

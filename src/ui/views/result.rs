use crate::QuizApp;
use crate::attempts::AttemptStatus;
use crate::ui::helpers::status_text;
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::score_label;
use egui::{Context, RichText};

pub fn ui_result(app: &mut QuizApp, ctx: &Context) {
    let result = app.last_result.clone();
    let summary = app.last_summary;

    centered_panel(ctx, 320.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Intento enviado");
            ui.add_space(14.0);

            if let Some(attempt) = &result {
                let status = AttemptStatus::of(attempt);
                ui.label(RichText::new(score_label(attempt)).heading().strong());
                ui.label(status_text(status));
                if status == AttemptStatus::PendingReview {
                    ui.add_space(6.0);
                    ui.label("La nota final llegará cuando el profesor corrija las preguntas abiertas.");
                }
            }
            if let Some(summary) = summary {
                ui.add_space(10.0);
                ui.label(format!(
                    "Respondiste {} de {} preguntas ({} marcadas).",
                    summary.answered, summary.total, summary.bookmarked
                ));
            }
            if app.demo_mode {
                ui.add_space(6.0);
                ui.label(RichText::new("Modo demo: este intento no se ha guardado.").weak());
            }
            ui.add_space(18.0);
        });

        let width = ui.available_width();
        let can_review = !app.demo_mode && result.is_some();
        let (review, back) = two_button_row(ui, width, ("🔍 Revisar", can_review), ("🔙 Volver al quiz", true));
        if review {
            if let Some(attempt) = &result {
                app.open_review(&attempt.id);
            }
        }
        if back {
            app.back_to_intro();
        }
    });
}

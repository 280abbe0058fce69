use crate::QuizApp;
use crate::attempts::AttemptStatus;
use crate::code_utils::c_like_syntax;
use crate::model::AnswerData;
use crate::ui::helpers::status_text;
use crate::ui::layout::{code_editor_readonly, simple_panel};
use crate::view_models::{ReviewRow, score_label};
use egui::{Context, RichText};

pub fn ui_review(app: &mut QuizApp, ctx: &Context) {
    let Some(detail) = app.review.clone() else {
        app.back_to_intro();
        return;
    };

    simple_panel(ctx, 720.0, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Revisión del intento");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔙 Volver").clicked() {
                    app.review = None;
                    app.back_to_intro();
                }
            });
        });
        ui.label(RichText::new(score_label(&detail.attempt)).strong());
        ui.label(status_text(AttemptStatus::of_detail(&detail)));
        ui.add_space(10.0);

        let width = ui.available_width();
        for (n, answer) in detail.answers.iter().enumerate() {
            let row = ReviewRow::from_answer(answer);
            ui.separator();
            ui.label(RichText::new(format!("{}. {}", n + 1, row.prompt)).strong());
            match &answer.answer {
                // el código se muestra con formato aunque sea de solo lectura
                Some(AnswerData::Code { code }) => {
                    code_editor_readonly(ui, &format!("review_{}", answer.id), width, c_like_syntax(), code)
                }
                _ => {
                    ui.label(format!("Tu respuesta: {}", row.answer));
                }
            }
            ui.horizontal(|ui| {
                ui.label(&row.result);
                ui.label(RichText::new(&row.points).weak());
            });
            if let Some(feedback) = &row.feedback {
                ui.label(RichText::new(format!("💬 {feedback}")).italics());
            }
            ui.add_space(6.0);
        }
    });
}

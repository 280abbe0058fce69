use crate::QuizApp;
use crate::ui::helpers::status_text;
use crate::ui::layout::simple_panel;
use crate::view_models::ReviewRow;
use egui::{Context, DragValue, RichText, TextEdit};

pub fn ui_grading(app: &mut QuizApp, ctx: &Context) {
    if app.grading.is_none() {
        app.open_home();
        return;
    }

    simple_panel(ctx, 720.0, |ui| {
        let mut save: Option<String> = None;
        let mut leave = false;

        if let Some(panel) = app.grading.as_mut() {
            ui.horizontal(|ui| {
                ui.heading("Corrección manual");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🏠 Terminar").clicked() {
                        leave = true;
                    }
                });
            });
            ui.label(format!("Intento {}", panel.attempt_id()));
            ui.label(status_text(panel.status()));
            ui.label(format!("Pendientes: {}", panel.pending_count()));
            ui.add_space(10.0);

            let answers: Vec<_> = panel.manual_answers().cloned().collect();
            if answers.is_empty() {
                ui.label("Este intento no tiene preguntas de corrección manual.");
            }
            for answer in &answers {
                let row = ReviewRow::from_answer(answer);
                ui.separator();
                ui.label(RichText::new(&row.prompt).strong());
                ui.label(format!("Respuesta: {}", row.answer));
                ui.label(RichText::new(format!("{} · {}", row.result, row.points)).weak());

                let Some(draft) = panel.draft_mut(&answer.id) else {
                    continue;
                };
                ui.horizontal(|ui| {
                    ui.label("Puntos");
                    let mut points = draft.points.unwrap_or(0.0);
                    // el rango real lo valida `prepare`; aquí solo se acota el arrastre
                    let response = ui.add(
                        DragValue::new(&mut points)
                            .speed(0.25)
                            .range(0.0..=answer.max_points),
                    );
                    if response.changed() || response.clicked() {
                        draft.points = Some(points);
                    }
                    ui.label(format!("/ {}", answer.max_points));
                    if draft.points.is_none() {
                        ui.label(RichText::new("(sin nota)").weak());
                    }
                });
                ui.add(
                    TextEdit::multiline(&mut draft.feedback)
                        .desired_rows(2)
                        .hint_text("Comentario para el alumno (opcional)")
                        .desired_width(f32::INFINITY),
                );
                if ui.button("💾 Guardar").clicked() {
                    save = Some(answer.id.clone());
                }
                ui.add_space(6.0);
            }
        }

        if let Some(answer_id) = save {
            app.save_grade(&answer_id);
        }
        if leave {
            app.grading = None;
            app.open_home();
        }
    });
}

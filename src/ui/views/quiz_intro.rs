use crate::QuizApp;
use crate::attempts::StartAvailability;
use crate::ui::helpers::{big_list_button, status_text};
use crate::ui::layout::simple_panel;
use egui::{Context, Grid, RichText};

pub fn ui_quiz_intro(app: &mut QuizApp, ctx: &Context) {
    let Some(bundle) = app.quiz.clone() else {
        app.open_home();
        return;
    };
    let quiz = &bundle.quiz;
    let availability = app.start_availability();
    let remaining = app.remaining_attempts();
    let rows = app.history_rows();

    simple_panel(ctx, 640.0, |ui| {
        ui.heading(&quiz.title);
        if let Some(description) = &quiz.description {
            ui.add_space(6.0);
            ui.label(description);
        }
        ui.add_space(12.0);

        Grid::new("quiz_info_grid").num_columns(2).spacing([24.0, 4.0]).show(ui, |ui| {
            ui.label("Preguntas");
            ui.label(bundle.questions.len().to_string());
            ui.end_row();
            ui.label("Puntos");
            ui.label(format!("{}", quiz.total_points));
            ui.end_row();
            ui.label("Nota para aprobar");
            ui.label(format!("{}%", quiz.passing_score));
            ui.end_row();
            ui.label("Tiempo");
            ui.label(match quiz.time_limit_minutes {
                Some(min) => format!("{min} min"),
                None => "Sin límite".to_string(),
            });
            ui.end_row();
            if !app.demo_mode {
                ui.label("Intentos restantes");
                ui.label(match remaining {
                    Some(n) => n.to_string(),
                    None => "Ilimitados".to_string(),
                });
                ui.end_row();
            }
        });
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            let btn_w = (ui.available_width() * 0.6).clamp(160.0, 320.0);
            let label = match &availability {
                StartAvailability::Resume { .. } => "▶ Retomar intento",
                _ => "▶ Empezar",
            };
            if big_list_button(ui, label, btn_w, 40.0, availability.enabled()) {
                app.start_quiz();
            }
            match availability {
                StartAvailability::Exhausted => {
                    ui.label(RichText::new("Has agotado los intentos de este quiz.").color(egui::Color32::YELLOW));
                }
                StartAvailability::Waiting if app.starting => {
                    ui.label(RichText::new("Creando el intento…").weak());
                }
                StartAvailability::Waiting if app.api.is_busy() => {
                    ui.label(RichText::new("Cargando tus intentos…").weak());
                }
                StartAvailability::Waiting => {
                    ui.label(RichText::new("No se pudo cargar tu historial de intentos.").color(egui::Color32::YELLOW));
                    if ui.button("🔄 Reintentar").clicked() {
                        app.reload_history();
                    }
                }
                _ => {}
            }
        });

        if app.demo_mode {
            return;
        }

        ui.add_space(16.0);
        ui.separator();
        ui.label(RichText::new("Tus intentos").strong());
        ui.add_space(6.0);
        if rows.is_empty() {
            ui.label("Todavía no has hecho ningún intento.");
            return;
        }
        Grid::new("attempt_history_grid")
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.label("#");
                ui.label("Fecha");
                ui.label("Nota");
                ui.label("Estado");
                ui.label("");
                ui.end_row();
                for row in &rows {
                    ui.label(row.number.to_string());
                    ui.label(&row.started);
                    ui.label(&row.score);
                    ui.label(status_text(row.status));
                    if ui.small_button("🔍 Revisar").clicked() {
                        app.open_review(&row.id);
                    }
                    ui.end_row();
                }
            });
    });
}

use crate::QuizApp;
use crate::session::{NavButtons, NavCommand};
use crate::ui::helpers::palette_button;
use crate::ui::layout::two_button_row;
use crate::ui::views::question::question_widget;
use crate::view_models::{PaletteCell, clock};
use egui::{CentralPanel, Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    if app.session.is_none() {
        app.back_to_intro();
        return;
    }

    // Flechas del teclado, solo si ningún campo de texto tiene el foco
    let typing = ctx.memory(|m| m.focused().is_some());
    let modal_open = app.confirm_submit || app.confirm_leave;
    if !typing && !modal_open {
        let command = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Key { key, pressed: true, .. } => NavCommand::from_key(*key),
                _ => None,
            })
        });
        if let Some(command) = command {
            app.navigate(command);
        }
    }

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 720.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        let Some(session) = app.session.as_ref() else {
            return;
        };
        let total = session.len();
        let index = session.current_index();
        let answered = session.answered_count();
        let remaining = session.time_remaining();
        let cells = PaletteCell::for_session(session);
        let buttons = NavButtons::for_session(session);
        let question = session.current_question().clone();
        let answer = session.answer(&question.id).cloned();
        let bookmarked = session.is_bookmarked(&question.id);
        let spent = session.time_on(&question.id);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    // ---- Cabecera: posición y contador ----
                    ui.horizontal(|ui| {
                        ui.heading(format!("Pregunta {} de {}", index + 1, total));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if let Some(secs) = remaining {
                                let text = RichText::new(format!("⏱ {}", clock(secs))).heading();
                                let text = if secs <= 60 {
                                    text.color(egui::Color32::LIGHT_RED)
                                } else {
                                    text
                                };
                                ui.label(text);
                            }
                        });
                    });
                    ui.add(
                        ProgressBar::new(answered as f32 / total.max(1) as f32)
                            .text(format!("{answered}/{total} respondidas")),
                    );
                    ui.add_space(6.0);

                    // ---- Paleta para saltar a cualquier pregunta ----
                    ui.horizontal_wrapped(|ui| {
                        for cell in &cells {
                            if palette_button(ui, cell) {
                                app.go_to_question(cell.index);
                            }
                        }
                    });
                    ui.add_space(10.0);
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!(
                                "{} · {} · {} pt",
                                question.kind.label(),
                                question.difficulty.label(),
                                question.points
                            ))
                            .weak(),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(format!("🕒 {}", clock(spent))).weak());
                            let mark = if bookmarked { "🔖 Marcada" } else { "🏷 Marcar para revisar" };
                            if ui.selectable_label(bookmarked, mark).clicked() {
                                app.toggle_current_bookmark();
                            }
                        });
                    });
                    ui.add_space(6.0);

                    // durante el envío la respuesta queda congelada
                    let edited = ui
                        .add_enabled_ui(!app.submitting, |ui| {
                            question_widget(ui, &question, answer.as_ref(), panel_width)
                        })
                        .inner;
                    if let Some(new_answer) = edited {
                        app.set_current_answer(new_answer);
                    }

                    ui.add_space(12.0);
                    let (prev, next) = two_button_row(
                        ui,
                        panel_width,
                        ("⬅ Anterior", buttons.prev_enabled),
                        ("Siguiente ➡", buttons.next_enabled),
                    );
                    if prev {
                        app.prev_question();
                    }
                    if next {
                        app.next_question();
                    }

                    ui.add_space(8.0);
                    let send_label = if app.submitting { "Enviando…" } else { "📤 Enviar intento" };
                    let (leave, send) = two_button_row(
                        ui,
                        panel_width,
                        ("🚪 Salir", !app.submitting),
                        (send_label, !app.submitting),
                    );
                    if leave {
                        app.confirm_leave = true;
                    }
                    if send {
                        app.request_submit();
                    }
                });
        });
    });
}

use crate::QuizApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if app.state == AppState::Quiz {
                // salir del quiz siempre pasa por confirmación
                if ui.button("🚪 Salir del quiz").clicked() {
                    app.confirm_leave = true;
                }
            } else if ui.button("🏠 Inicio").clicked() {
                app.open_home();
            }

            ui.separator();
            ui.label(app.quiz_title().to_owned());
            if app.demo_mode {
                ui.label(egui::RichText::new("DEMO").color(egui::Color32::YELLOW).strong());
            }
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if app.api.is_busy() {
                ui.spinner();
                ui.label("Conectando…");
            }
            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    app.settings.dark_mode = true;
                }
                if ui.button("☀Modo claro").clicked() {
                    app.settings.dark_mode = false;
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel de lectura larga con scroll (historial, revisión, corrección).
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                    });
            });
        });
    });
}

/// Editor de entrada con ancho fijo. Devuelve `true` si el texto cambió.
#[allow(clippy::too_many_arguments)]
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    fontsize: f32,
    syntax: Syntax,
    text: &mut String,
    max_height: f32,
) -> bool {
    let snapshot = text.clone();
    ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
    *text != snapshot
}

/// Editor de sólo lectura (código enviado en la revisión).
pub fn code_editor_readonly(ui: &mut Ui, id: &str, width: f32, syntax: Syntax, code: &str) {
    let mut buf = code.to_owned();
    let rows = code.lines().count().clamp(3, 20);
    ui.add_enabled_ui(false, |ui| {
        ui.set_width(width);
        CodeEditor::default()
            .id_source(id)
            .with_rows(rows)
            .with_fontsize(13.0)
            .with_theme(ColorTheme::GITHUB_DARK)
            .with_syntax(syntax)
            .with_numlines(true)
            .vscroll(false)
            .show(ui, &mut buf);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho). Cada botón puede ir deshabilitado.
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}

// src/ui/helpers.rs
use crate::attempts::AttemptStatus;
use crate::toast::{ToastKind, Toasts};
use crate::view_models::PaletteCell;
use egui::{Button, Color32, Context, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Casilla de la paleta de preguntas. Resalta la actual y las respondidas.
pub fn palette_button(ui: &mut Ui, cell: &PaletteCell) -> bool {
    let mut button = Button::new(cell.label()).min_size(Vec2::new(38.0, 28.0));
    if cell.current {
        button = button.stroke(egui::Stroke::new(2.0, ui.visuals().selection.stroke.color));
    }
    if cell.answered {
        button = button.fill(Color32::from_rgb(40, 90, 60));
    }
    ui.add(button).clicked()
}

pub fn status_text(status: AttemptStatus) -> RichText {
    let color = match status {
        AttemptStatus::InProgress => Color32::LIGHT_BLUE,
        AttemptStatus::PendingReview => Color32::YELLOW,
        AttemptStatus::Graded { passed: true } => Color32::LIGHT_GREEN,
        AttemptStatus::Graded { passed: false } => Color32::LIGHT_RED,
    };
    RichText::new(status.label()).color(color)
}

/// Avisos apilados en la esquina inferior derecha, por encima de todo.
pub fn toast_overlay(ctx: &Context, toasts: &Toasts) {
    if toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -48.0])
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in toasts.items() {
                let (fill, icon) = match toast.kind {
                    ToastKind::Success => (Color32::from_rgb(30, 110, 60), "✅"),
                    ToastKind::Error => (Color32::from_rgb(140, 35, 35), "❌"),
                    ToastKind::Info => (Color32::from_rgb(40, 70, 120), "ℹ"),
                };
                egui::Frame::default()
                    .fill(fill)
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.set_max_width(360.0);
                        ui.label(RichText::new(format!("{icon} {}", toast.text)).color(Color32::WHITE));
                    });
                ui.add_space(4.0);
            }
        });
}

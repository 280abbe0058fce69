mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::{Context, Visuals};
use helpers::toast_overlay;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reloj de egui: contador por pregunta, límite de tiempo y avisos
        let now = ctx.input(|i| i.time);
        self.pump_api();
        self.tick(now);

        ctx.set_visuals(if self.settings.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        // PANEL SUPERIOR (oculto en inicio y carga)
        if !matches!(self.state, AppState::Home | AppState::Loading) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por estado a las funciones en views
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Loading => views::loading::ui_loading(self, ctx),
            AppState::QuizIntro => views::quiz_intro::ui_quiz_intro(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Result => views::result::ui_result(self, ctx),
            AppState::Review => views::review::ui_review(self, ctx),
            AppState::Grading => views::grading::ui_grading(self, ctx),
            AppState::Uploads => views::uploads::ui_uploads(self, ctx),
        }

        if self.confirm_submit {
            self.confirm_submit(ctx);
        }
        if self.confirm_leave {
            self.confirm_leave(ctx);
        }

        toast_overlay(ctx, &self.toasts);

        // Sin entrada del usuario egui no repinta: el contador y los avisos lo necesitan
        if self.state == AppState::Quiz || self.api.is_busy() || !self.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Solo preferencias: las respuestas nunca salen de memoria
        set_value(storage, APP_KEY, &self.settings);
    }
}

use super::*;

impl QuizApp {
    /// Olvida el quiz cargado y todo lo que cuelga de él.
    pub fn reset_quiz_state(&mut self) {
        self.close_session();
        self.quiz = None;
        self.history.clear();
        self.history_loaded = false;
        self.starting = false;
        self.attempt = None;
        self.last_result = None;
        self.last_summary = None;
        self.review = None;
        self.grading = None;
        self.detail_target = None;
        self.load_error = None;
        self.auto_submitted = false;
        self.demo_mode = false;
    }

    pub fn confirm_leave(&mut self, ctx: &egui::Context) {
        egui::Window::new("Salir del quiz")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Si sales ahora perderás las respuestas que no hayas enviado.");
                ui.horizontal(|ui| {
                    if ui.button("Salir sin enviar").clicked() {
                        self.leave_quiz();
                    }
                    if ui.button("Seguir respondiendo").clicked() {
                        self.confirm_leave = false;
                    }
                });
            });
    }

    pub fn confirm_submit(&mut self, ctx: &egui::Context) {
        let Some(session) = &self.session else {
            self.confirm_submit = false;
            return;
        };
        let summary = SubmitSummary::from_session(session);

        egui::Window::new("Enviar intento")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!(
                    "Has respondido {} de {} preguntas.",
                    summary.answered, summary.total
                ));
                if summary.unanswered > 0 {
                    ui.label(format!("⚠ Quedan {} sin responder.", summary.unanswered));
                }
                if summary.bookmarked > 0 {
                    ui.label(format!("🔖 {} marcadas para revisar.", summary.bookmarked));
                }
                if summary.manual > 0 {
                    ui.label("📝 Las preguntas de ensayo y código las corrige el profesor.");
                }
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("Enviar").clicked() {
                        self.submit_attempt();
                    }
                    if ui.button("Cancelar").clicked() {
                        self.confirm_submit = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::app_with_quiz;

    #[test]
    fn reset_clears_loaded_quiz() {
        let mut a = app_with_quiz();
        a.demo_mode = true;
        a.start_quiz();
        a.reset_quiz_state();
        assert!(a.quiz.is_none());
        assert!(a.session.is_none());
        assert!(!a.demo_mode);
        assert!(!a.timer.is_running());
    }
}

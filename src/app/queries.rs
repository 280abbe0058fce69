use super::*;
use crate::attempts::{StartAvailability, remaining_attempts};
use crate::view_models::AttemptRow;

impl QuizApp {
    pub fn start_availability(&self) -> StartAvailability {
        match &self.quiz {
            Some(_) if self.demo_mode => StartAvailability::Start,
            // sin historial no se conoce el límite de intentos
            Some(_) if !self.history_loaded || self.starting => StartAvailability::Waiting,
            Some(bundle) => StartAvailability::evaluate(&bundle.quiz, &self.history),
            None => StartAvailability::Exhausted,
        }
    }

    pub fn remaining_attempts(&self) -> Option<u32> {
        let bundle = self.quiz.as_ref()?;
        remaining_attempts(bundle.quiz.max_attempts, self.history.len())
    }

    pub fn history_rows(&self) -> Vec<AttemptRow> {
        AttemptRow::from_history(&self.history)
    }

    pub fn quiz_title(&self) -> &str {
        self.quiz
            .as_ref()
            .map(|b| b.quiz.title.as_str())
            .unwrap_or("Quiz")
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{app, app_with_quiz};
    use crate::attempts::StartAvailability;

    #[test]
    fn no_quiz_means_nothing_to_start() {
        let a = app();
        assert!(!a.start_availability().enabled());
        assert_eq!(a.remaining_attempts(), None);
    }

    #[test]
    fn start_waits_for_history_and_for_pending_start() {
        let mut a = app_with_quiz();
        a.history_loaded = false;
        assert_eq!(a.start_availability(), StartAvailability::Waiting);
        assert!(!a.start_availability().enabled());

        a.history_loaded = true;
        assert_eq!(a.start_availability(), StartAvailability::Start);
        a.starting = true;
        assert_eq!(a.start_availability(), StartAvailability::Waiting);

        // el modo demo no depende del backend
        a.demo_mode = true;
        assert!(a.start_availability().enabled());
    }

    #[test]
    fn remaining_attempts_uses_history_length() {
        let mut a = app_with_quiz();
        if let Some(b) = a.quiz.as_mut() {
            b.quiz.max_attempts = Some(3);
        }
        assert_eq!(a.remaining_attempts(), Some(3));
        assert_eq!(a.quiz_title(), "Ownership");
    }
}

use egui::Key;

use crate::session::QuizSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
}

impl NavCommand {
    /// Derecha/abajo avanzan, izquierda/arriba retroceden.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowRight | Key::ArrowDown => Some(NavCommand::Next),
            Key::ArrowLeft | Key::ArrowUp => Some(NavCommand::Previous),
            _ => None,
        }
    }

    pub fn apply(self, session: &mut QuizSession) -> bool {
        match self {
            NavCommand::Next => session.next_question(),
            NavCommand::Previous => session.prev_question(),
        }
    }
}

/// Estado habilitado de los botones "Anterior" / "Siguiente".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl NavButtons {
    pub fn for_session(session: &QuizSession) -> Self {
        Self {
            prev_enabled: session.has_prev(),
            next_enabled: session.has_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::three_question_bundle;

    #[test]
    fn arrow_keys_map_to_commands() {
        assert_eq!(NavCommand::from_key(Key::ArrowDown), Some(NavCommand::Next));
        assert_eq!(NavCommand::from_key(Key::ArrowUp), Some(NavCommand::Previous));
        assert_eq!(NavCommand::from_key(Key::Enter), None);
    }

    #[test]
    fn buttons_disable_at_the_edges() {
        let mut s = QuizSession::new(three_question_bundle()).unwrap();
        assert_eq!(
            NavButtons::for_session(&s),
            NavButtons { prev_enabled: false, next_enabled: true }
        );
        NavCommand::Next.apply(&mut s);
        NavCommand::Next.apply(&mut s);
        assert!(!NavCommand::Next.apply(&mut s));
        assert_eq!(
            NavButtons::for_session(&s),
            NavButtons { prev_enabled: true, next_enabled: false }
        );
    }

    #[test]
    fn previous_from_first_question_is_a_no_op() {
        let mut s = QuizSession::new(three_question_bundle()).unwrap();
        assert!(!NavCommand::Previous.apply(&mut s));
        assert_eq!(s.current_index(), 0);
    }
}

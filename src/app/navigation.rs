use super::*;
use crate::model::AnswerData;
use crate::session::NavCommand;

impl QuizApp {
    pub fn next_question(&mut self) -> bool {
        self.navigate(NavCommand::Next)
    }

    pub fn prev_question(&mut self) -> bool {
        self.navigate(NavCommand::Previous)
    }

    pub fn navigate(&mut self, command: NavCommand) -> bool {
        self.session
            .as_mut()
            .map(|s| command.apply(s))
            .unwrap_or(false)
    }

    pub fn go_to_question(&mut self, index: usize) -> bool {
        self.session
            .as_mut()
            .map(|s| s.go_to(index))
            .unwrap_or(false)
    }

    /// Escribe la respuesta de la pregunta activa (se llama en cada cambio del widget).
    pub fn set_current_answer(&mut self, data: AnswerData) {
        if self.submitting {
            log::debug!("answer ignored while the attempt is being submitted");
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let question_id = session.current_question().id.clone();
        if let Err(err) = session.set_answer(&question_id, data) {
            log::warn!("answer dropped: {err}");
        }
    }

    pub fn toggle_current_bookmark(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let question_id = session.current_question().id.clone();
        match session.toggle_bookmark(&question_id) {
            Ok(marked) => log::debug!("bookmark {question_id}: {marked}"),
            Err(err) => log::warn!("bookmark dropped: {err}"),
        }
    }

    pub fn open_home(&mut self) {
        self.close_session();
        self.state = AppState::Home;
    }

    pub fn back_to_intro(&mut self) {
        if self.quiz.is_some() {
            self.state = AppState::QuizIntro;
        } else {
            self.state = AppState::Home;
        }
    }

    pub fn open_uploads(&mut self) {
        self.state = AppState::Uploads;
    }
}

use serde::{Deserialize, Serialize};

use crate::model::{AnswerData, QuestionId};
use crate::session::QuizSession;

/// Cuerpo de `POST /attempts/{id}/submit`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttemptRequest {
    pub answers: Vec<SubmittedAnswer>,
    pub bookmarked_question_ids: Vec<QuestionId>,
    pub time_spent_seconds: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: QuestionId,
    #[serde(flatten)]
    pub answer: AnswerData,
    pub time_spent_seconds: u64,
}

impl SubmitAttemptRequest {
    /// Copia de la sesión en el orden en que se mostraron las preguntas.
    /// Las preguntas sin respuesta (o con texto vacío) no aparecen.
    pub fn from_session(session: &QuizSession) -> Self {
        let answers = session
            .questions()
            .iter()
            .filter_map(|q| {
                let answer = session.answer(&q.id)?;
                if answer.is_blank() {
                    return None;
                }
                Some(SubmittedAnswer {
                    question_id: q.id.clone(),
                    answer: answer.clone(),
                    time_spent_seconds: session.time_on(&q.id),
                })
            })
            .collect();

        Self {
            answers,
            bookmarked_question_ids: session.bookmarks().iter().cloned().collect(),
            time_spent_seconds: session.total_time(),
        }
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.iter().any(|a| a.question_id == question_id)
    }
}

/// Recuento mostrado en el diálogo de confirmación antes de enviar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitSummary {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    pub bookmarked: usize,
    pub manual: usize,
}

impl SubmitSummary {
    pub fn from_session(session: &QuizSession) -> Self {
        let total = session.len();
        let answered = session.answered_count();
        Self {
            total,
            answered,
            unanswered: total - answered,
            bookmarked: session.bookmarks().len(),
            manual: session
                .questions()
                .iter()
                .filter(|q| q.kind.is_manually_graded() && session.is_answered(&q.id))
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{WordCountStatus, word_count};
    use crate::session::tests::three_question_bundle;

    #[test]
    fn blank_essay_is_left_out_of_the_payload() {
        let mut s = QuizSession::new(three_question_bundle()).unwrap();
        s.set_answer("q1", AnswerData::SelectedOption { option_id: "B".into() })
            .unwrap();
        s.next_question();
        s.set_answer("q2", AnswerData::Boolean { value: true }).unwrap();
        s.next_question();

        let payload = SubmitAttemptRequest::from_session(&s);
        assert_eq!(payload.answers.len(), 2);
        assert!(payload.contains("q1"));
        assert!(payload.contains("q2"));
        assert!(!payload.contains("q3"));
        assert_eq!(
            payload.answers[0].answer,
            AnswerData::SelectedOption { option_id: "B".into() }
        );
    }

    #[test]
    fn short_essay_still_goes_out_with_a_warning() {
        let mut s = QuizSession::new(three_question_bundle()).unwrap();
        let text = "uno dos tres cuatro cinco seis siete ocho nueve diez";
        s.set_answer("q3", AnswerData::Essay { text: text.into() }).unwrap();

        assert_eq!(word_count(text), 10);
        assert_eq!(
            WordCountStatus::evaluate(10, Some(50), None),
            WordCountStatus::BelowMinimum { min: 50 }
        );
        let payload = SubmitAttemptRequest::from_session(&s);
        assert!(payload.contains("q3"));
    }

    #[test]
    fn payload_carries_time_and_bookmarks() {
        let mut s = QuizSession::new(three_question_bundle()).unwrap();
        s.set_answer("q1", AnswerData::SelectedOption { option_id: "A".into() })
            .unwrap();
        s.add_question_time("q1", 12).unwrap();
        s.toggle_bookmark("q3").unwrap();

        let payload = SubmitAttemptRequest::from_session(&s);
        assert_eq!(payload.answers[0].time_spent_seconds, 12);
        assert_eq!(payload.time_spent_seconds, 12);
        assert_eq!(payload.bookmarked_question_ids, vec!["q3".to_string()]);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["answers"][0]["questionId"], "q1");
        assert_eq!(json["answers"][0]["type"], "selected_option");
        assert_eq!(json["answers"][0]["optionId"], "A");
    }

    #[test]
    fn summary_counts_unanswered_and_manual() {
        let mut s = QuizSession::new(three_question_bundle()).unwrap();
        s.set_answer("q3", AnswerData::Essay { text: "hola".into() }).unwrap();
        s.toggle_bookmark("q1").unwrap();
        let summary = SubmitSummary::from_session(&s);
        assert_eq!(
            summary,
            SubmitSummary { total: 3, answered: 1, unanswered: 2, bookmarked: 1, manual: 1 }
        );
    }
}

//! Panel de corrección manual de un intento.
//!
//! Cada respuesta se corrige y se envía por separado: no hay transacción, así
//! que dejar la corrección a medias es válido y se puede retomar más tarde.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attempts::AttemptStatus;
use crate::error::GradeError;
use crate::model::{AttemptAnswer, AttemptDetail};

/// Cuerpo de `PATCH /attempts/{id}/answers/{answer_id}/grade`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradeAnswerRequest {
    pub points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeDraft {
    pub points: Option<f64>,
    pub feedback: String,
}

#[derive(Debug, Clone)]
pub struct GradingPanel {
    detail: AttemptDetail,
    drafts: HashMap<String, GradeDraft>,
}

impl GradingPanel {
    pub fn open(detail: AttemptDetail) -> Self {
        let drafts = detail
            .answers
            .iter()
            .filter(|a| a.manual_grading)
            .map(|a| {
                (
                    a.id.clone(),
                    GradeDraft {
                        points: a.points_awarded,
                        feedback: a.feedback.clone().unwrap_or_default(),
                    },
                )
            })
            .collect();
        Self { detail, drafts }
    }

    pub fn detail(&self) -> &AttemptDetail {
        &self.detail
    }

    pub fn attempt_id(&self) -> &str {
        &self.detail.attempt.id
    }

    pub fn manual_answers(&self) -> impl Iterator<Item = &AttemptAnswer> {
        self.detail.answers.iter().filter(|a| a.manual_grading)
    }

    pub fn pending_count(&self) -> usize {
        self.detail.answers.iter().filter(|a| a.awaiting_grade()).count()
    }

    pub fn is_fully_graded(&self) -> bool {
        self.pending_count() == 0
    }

    pub fn status(&self) -> AttemptStatus {
        AttemptStatus::of_detail(&self.detail)
    }

    pub fn draft(&self, answer_id: &str) -> Option<&GradeDraft> {
        self.drafts.get(answer_id)
    }

    pub fn draft_mut(&mut self, answer_id: &str) -> Option<&mut GradeDraft> {
        self.drafts.get_mut(answer_id)
    }

    fn manual_answer(&self, answer_id: &str) -> Result<&AttemptAnswer, GradeError> {
        let answer = self
            .detail
            .answers
            .iter()
            .find(|a| a.id == answer_id)
            .ok_or_else(|| GradeError::UnknownAnswer(answer_id.to_string()))?;
        if !answer.manual_grading {
            return Err(GradeError::NotManual(answer_id.to_string()));
        }
        Ok(answer)
    }

    pub fn set_points(&mut self, answer_id: &str, points: f64) -> Result<(), GradeError> {
        self.manual_answer(answer_id)?;
        if let Some(draft) = self.drafts.get_mut(answer_id) {
            draft.points = Some(points);
        }
        Ok(())
    }

    pub fn set_feedback(&mut self, answer_id: &str, feedback: &str) -> Result<(), GradeError> {
        self.manual_answer(answer_id)?;
        if let Some(draft) = self.drafts.get_mut(answer_id) {
            draft.feedback = feedback.to_string();
        }
        Ok(())
    }

    /// Valida el borrador y construye la petición. Los errores se quedan en
    /// el cliente y nunca llegan al backend.
    pub fn prepare(&self, answer_id: &str) -> Result<GradeAnswerRequest, GradeError> {
        let answer = self.manual_answer(answer_id)?;
        let draft = self
            .drafts
            .get(answer_id)
            .ok_or_else(|| GradeError::UnknownAnswer(answer_id.to_string()))?;
        let points = draft
            .points
            .ok_or_else(|| GradeError::MissingPoints(answer_id.to_string()))?;
        if !points.is_finite() || points < 0.0 || points > answer.max_points {
            return Err(GradeError::PointsOutOfRange {
                points,
                max: answer.max_points,
            });
        }
        let feedback = draft.feedback.trim();
        Ok(GradeAnswerRequest {
            points,
            feedback: (!feedback.is_empty()).then(|| feedback.to_string()),
        })
    }

    /// Incorpora la respuesta corregida que devolvió el backend.
    pub fn apply_graded(&mut self, updated: AttemptAnswer) {
        if let Some(slot) = self.detail.answers.iter_mut().find(|a| a.id == updated.id) {
            if let Some(draft) = self.drafts.get_mut(&updated.id) {
                draft.points = updated.points_awarded;
                draft.feedback = updated.feedback.clone().unwrap_or_default();
            }
            *slot = updated;
        } else {
            log::warn!("graded answer {} is not part of attempt {}", updated.id, self.attempt_id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerData, Attempt};
    use chrono::Utc;

    fn answer(id: &str, manual: bool) -> AttemptAnswer {
        AttemptAnswer {
            id: id.into(),
            question_id: format!("q-{id}"),
            prompt: Some("Explica el préstamo".into()),
            answer: Some(AnswerData::Essay { text: "texto".into() }),
            is_correct: if manual { None } else { Some(true) },
            points_awarded: if manual { None } else { Some(1.0) },
            max_points: 10.0,
            feedback: None,
            manual_grading: manual,
        }
    }

    fn panel() -> GradingPanel {
        GradingPanel::open(AttemptDetail {
            attempt: Attempt {
                id: "att-1".into(),
                user_id: "u1".into(),
                quiz_id: "quiz-1".into(),
                started_at: Utc::now(),
                submitted_at: Some(Utc::now()),
                score: Some(1.0),
                max_score: Some(21.0),
                percentage: None,
                passed: None,
                in_progress: false,
            },
            answers: vec![answer("a1", false), answer("a2", true), answer("a3", true)],
        })
    }

    #[test]
    fn only_manual_answers_get_drafts() {
        let p = panel();
        assert_eq!(p.manual_answers().count(), 2);
        assert!(p.draft("a1").is_none());
        assert_eq!(p.pending_count(), 2);
        assert_eq!(p.status(), AttemptStatus::PendingReview);
    }

    #[test]
    fn points_outside_range_fail_validation() {
        let mut p = panel();
        assert_eq!(p.prepare("a2").unwrap_err(), GradeError::MissingPoints("a2".into()));
        p.set_points("a2", 11.0).unwrap();
        assert_eq!(
            p.prepare("a2").unwrap_err(),
            GradeError::PointsOutOfRange { points: 11.0, max: 10.0 }
        );
        p.set_points("a2", -1.0).unwrap();
        assert!(p.prepare("a2").is_err());
    }

    #[test]
    fn auto_graded_answers_cannot_be_graded_by_hand() {
        let mut p = panel();
        assert_eq!(p.set_points("a1", 1.0).unwrap_err(), GradeError::NotManual("a1".into()));
        assert_eq!(p.prepare("zz").unwrap_err(), GradeError::UnknownAnswer("zz".into()));
    }

    #[test]
    fn blank_feedback_is_omitted() {
        let mut p = panel();
        p.set_points("a2", 7.5).unwrap();
        p.set_feedback("a2", "   ").unwrap();
        assert_eq!(
            p.prepare("a2").unwrap(),
            GradeAnswerRequest { points: 7.5, feedback: None }
        );
        p.set_feedback("a2", " Bien argumentado ").unwrap();
        assert_eq!(p.prepare("a2").unwrap().feedback.as_deref(), Some("Bien argumentado"));
    }

    #[test]
    fn partial_grading_is_resumable() {
        let mut p = panel();
        let mut graded = answer("a2", true);
        graded.points_awarded = Some(8.0);
        graded.feedback = Some("Bien".into());
        p.apply_graded(graded);

        assert_eq!(p.pending_count(), 1);
        assert!(!p.is_fully_graded());
        assert_eq!(p.draft("a2").unwrap().points, Some(8.0));

        // reabrir con el detalle actualizado conserva lo ya corregido
        let reopened = GradingPanel::open(p.detail().clone());
        assert_eq!(reopened.pending_count(), 1);
        assert_eq!(reopened.draft("a2").unwrap().feedback, "Bien");

        let mut last = answer("a3", true);
        last.points_awarded = Some(2.0);
        p.apply_graded(last);
        assert!(p.is_fully_graded());
    }
}

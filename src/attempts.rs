use crate::model::{Attempt, AttemptDetail, Quiz};

/// Intentos que le quedan al alumno según lo que conoce el cliente.
/// `None` significa sin límite. El backend sigue siendo quien decide.
pub fn remaining_attempts(max_attempts: Option<u32>, used: usize) -> Option<u32> {
    max_attempts.map(|max| {
        let used = u32::try_from(used).unwrap_or(u32::MAX);
        max.saturating_sub(used)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartAvailability {
    /// Se puede crear un intento nuevo.
    Start,
    /// Hay un intento abierto; se reutiliza en lugar de crear otro.
    Resume { attempt_id: String },
    /// Sin intentos restantes: el botón de empezar queda deshabilitado.
    Exhausted,
    /// Falta el historial o ya hay un inicio en vuelo; no se sabe si se puede empezar.
    Waiting,
}

impl StartAvailability {
    pub fn evaluate(quiz: &Quiz, history: &[Attempt]) -> Self {
        if let Some(open) = history.iter().find(|a| a.in_progress) {
            return StartAvailability::Resume {
                attempt_id: open.id.clone(),
            };
        }
        match remaining_attempts(quiz.max_attempts, history.len()) {
            Some(0) => StartAvailability::Exhausted,
            _ => StartAvailability::Start,
        }
    }

    pub fn enabled(&self) -> bool {
        matches!(self, StartAvailability::Start | StartAvailability::Resume { .. })
    }
}

/// Estado de un intento visto por el alumno.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    InProgress,
    PendingReview,
    Graded { passed: bool },
}

impl AttemptStatus {
    pub fn of(attempt: &Attempt) -> Self {
        if attempt.in_progress || attempt.submitted_at.is_none() {
            return AttemptStatus::InProgress;
        }
        match attempt.passed {
            Some(passed) => AttemptStatus::Graded { passed },
            None => AttemptStatus::PendingReview,
        }
    }

    /// Con el detalle a mano, cualquier respuesta manual sin puntos deja el
    /// intento en revisión aunque el resumen diga otra cosa.
    pub fn of_detail(detail: &AttemptDetail) -> Self {
        match Self::of(&detail.attempt) {
            AttemptStatus::InProgress => AttemptStatus::InProgress,
            _ if detail.answers.iter().any(|a| a.awaiting_grade()) => AttemptStatus::PendingReview,
            status => status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttemptStatus::InProgress => "⏳ En curso",
            AttemptStatus::PendingReview => "📝 En revisión",
            AttemptStatus::Graded { passed: true } => "✅ Aprobado",
            AttemptStatus::Graded { passed: false } => "❌ No aprobado",
        }
    }
}

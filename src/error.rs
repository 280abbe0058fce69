use thiserror::Error;

use crate::model::QuestionId;

/// Errores de la capa HTTP. El texto de `Display` va al log; al usuario solo
/// le llega `user_message()`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}: {body}")]
    Http { status: u16, url: String, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("could not build request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "Sin conexión con el servidor",
            ApiError::Http { status: 401 | 403, .. } => "No tienes permiso para esta acción",
            ApiError::Http { status: 404, .. } => "No se encontró el recurso",
            ApiError::Http { status: 409 | 422, .. } => "El servidor rechazó la operación",
            ApiError::Http { .. } => "El servidor devolvió un error",
            ApiError::Decode(_) => "Respuesta inesperada del servidor",
            ApiError::Request(_) => "No se pudo preparar la petición",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(QuestionId),

    #[error("question {0} is not the active question")]
    InactiveQuestion(QuestionId),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    #[error("answer {0} is not part of this attempt")]
    UnknownAnswer(String),

    #[error("answer {0} does not need manual grading")]
    NotManual(String),

    #[error("points must be between 0 and {max}, got {points}")]
    PointsOutOfRange { points: f64, max: f64 },

    #[error("points missing for answer {0}")]
    MissingPoints(String),
}

impl GradeError {
    pub fn user_message(&self) -> String {
        match self {
            GradeError::PointsOutOfRange { max, .. } => {
                format!("La puntuación debe estar entre 0 y {max}")
            }
            GradeError::MissingPoints(_) => "Indica una puntuación antes de guardar".into(),
            GradeError::UnknownAnswer(_) | GradeError::NotManual(_) => {
                "Esta respuesta no admite corrección manual".into()
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("demo quiz bank is invalid: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_hide_status_codes() {
        let err = ApiError::Http {
            status: 500,
            url: "http://x/api/attempts/1/submit".into(),
            body: "stack trace".into(),
        };
        let msg = err.user_message();
        assert!(!msg.contains("500"));
        assert!(!msg.contains("stack"));
        assert_eq!(
            ApiError::Http { status: 403, url: String::new(), body: String::new() }.user_message(),
            "No tienes permiso para esta acción"
        );
    }

    #[test]
    fn grade_error_message_mentions_bound() {
        let err = GradeError::PointsOutOfRange { points: 12.0, max: 10.0 };
        assert_eq!(err.user_message(), "La puntuación debe estar entre 0 y 10");
    }
}

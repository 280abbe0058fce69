use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type QuestionId = String;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time_limit_minutes: Option<u32>,
    pub passing_score: f64,
    #[serde(default)]
    pub max_attempts: Option<u32>,
    #[serde(default)]
    pub randomize_questions: bool,
    #[serde(default)]
    pub randomize_options: bool,
    #[serde(default)]
    pub total_questions: usize,
    #[serde(default)]
    pub total_points: f64,
}

/// Quiz tal y como lo devuelve el backend: metadatos + preguntas en orden.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizBundle {
    pub quiz: Quiz,
    pub questions: Vec<Question>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    #[serde(default = "default_points")]
    pub points: f64,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

fn default_points() -> f64 {
    1.0
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: Option<bool>,
}

/// Datos específicos de cada tipo de pregunta. Un tipo que el cliente no
/// conoce se deserializa como `Unsupported` y se pinta con un panel neutro.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(
    tag = "type",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<ChoiceOption>,
    },
    TrueFalse {
        #[serde(default)]
        correct_answer: Option<bool>,
    },
    FillBlank {
        #[serde(default)]
        accepted_answers: Vec<String>,
    },
    Essay {
        #[serde(default)]
        min_words: Option<usize>,
        #[serde(default)]
        max_words: Option<usize>,
    },
    CodeChallenge {
        #[serde(default)]
        language: Option<String>,
        #[serde(default)]
        starter_code: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

impl QuestionKind {
    /// Essay y code los corrige un instructor a mano.
    pub fn is_manually_graded(&self) -> bool {
        matches!(
            self,
            QuestionKind::Essay { .. } | QuestionKind::CodeChallenge { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "Opción múltiple",
            QuestionKind::TrueFalse { .. } => "Verdadero / Falso",
            QuestionKind::FillBlank { .. } => "Completar",
            QuestionKind::Essay { .. } => "Ensayo",
            QuestionKind::CodeChallenge { .. } => "Código",
            QuestionKind::Unsupported => "Desconocido",
        }
    }
}

/// Respuesta en curso de una pregunta. Solo vive en memoria durante el intento.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(
    tag = "type",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum AnswerData {
    SelectedOption { option_id: String },
    Boolean { value: bool },
    FillBlank { text: String },
    Essay { text: String },
    Code { code: String },
}

impl AnswerData {
    /// Texto libre vacío cuenta como "sin responder".
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerData::SelectedOption { option_id } => option_id.trim().is_empty(),
            AnswerData::Boolean { .. } => false,
            AnswerData::FillBlank { text } | AnswerData::Essay { text } => text.trim().is_empty(),
            AnswerData::Code { code } => code.trim().is_empty(),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            AnswerData::SelectedOption { option_id } => format!("Opción {option_id}"),
            AnswerData::Boolean { value } => {
                if *value { "Verdadero".into() } else { "Falso".into() }
            }
            AnswerData::FillBlank { text } | AnswerData::Essay { text } => text.clone(),
            AnswerData::Code { code } => code.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub passed: Option<bool>,
    #[serde(default)]
    pub in_progress: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttemptAnswer {
    pub id: String,
    pub question_id: QuestionId,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub answer: Option<AnswerData>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub points_awarded: Option<f64>,
    #[serde(default = "default_points")]
    pub max_points: f64,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub manual_grading: bool,
}

impl AttemptAnswer {
    /// Pendiente de corrección manual: el backend no ha asignado puntos todavía.
    pub fn awaiting_grade(&self) -> bool {
        self.manual_grading && self.points_awarded.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttemptDetail {
    pub attempt: Attempt,
    #[serde(default)]
    pub answers: Vec<AttemptAnswer>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Video,
    Thumbnail,
    Attachment,
    Subtitle,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Video,
        AssetKind::Thumbnail,
        AssetKind::Attachment,
        AssetKind::Subtitle,
    ];

    pub fn path_segment(self) -> &'static str {
        match self {
            AssetKind::Video => "video",
            AssetKind::Thumbnail => "thumbnail",
            AssetKind::Attachment => "attachment",
            AssetKind::Subtitle => "subtitle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Video => "Vídeo",
            AssetKind::Thumbnail => "Miniatura",
            AssetKind::Attachment => "Adjunto",
            AssetKind::Subtitle => "Subtítulos",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAsset {
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Loading,
    QuizIntro,
    Quiz,
    Result,
    Review,
    Grading,
    Uploads,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kinds_deserialize_from_backend_json() {
        let json = r#"[
            {"id":"q1","prompt":"2+2?","points":2,"difficulty":"easy","type":"multiple_choice",
             "options":[{"id":"a","text":"3"},{"id":"b","text":"4","isCorrect":true}]},
            {"id":"q2","prompt":"Rust es seguro","type":"true_false","correctAnswer":true},
            {"id":"q3","prompt":"Explica","type":"essay","minWords":50,"maxWords":300},
            {"id":"q4","prompt":"Escribe","type":"code_challenge","language":"rust","starterCode":"fn main() {}"},
            {"id":"q5","prompt":"Capital","type":"fill_blank","acceptedAnswers":["Madrid"]}
        ]"#;
        let questions: Vec<Question> = serde_json::from_str(json).unwrap();
        assert_eq!(questions.len(), 5);
        assert!(matches!(
            &questions[0].kind,
            QuestionKind::MultipleChoice { options } if options.len() == 2
        ));
        assert_eq!(questions[0].difficulty, Difficulty::Easy);
        assert_eq!(questions[1].points, 1.0);
        assert_eq!(
            questions[2].kind,
            QuestionKind::Essay { min_words: Some(50), max_words: Some(300) }
        );
        assert!(questions[3].kind.is_manually_graded());
        assert!(!questions[4].kind.is_manually_graded());
    }

    #[test]
    fn unknown_kind_falls_back_to_unsupported() {
        let json = r#"{"id":"q9","prompt":"Ordena","type":"matching","pairs":[]}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind, QuestionKind::Unsupported);
    }

    #[test]
    fn answer_data_is_tagged_and_blank_aware() {
        let a = AnswerData::SelectedOption { option_id: "b".into() };
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["type"], "selected_option");
        assert_eq!(json["optionId"], "b");

        assert!(AnswerData::Essay { text: "   ".into() }.is_blank());
        assert!(!AnswerData::Boolean { value: false }.is_blank());
    }

    #[test]
    fn manual_answer_awaits_grade_until_points_arrive() {
        let mut answer = AttemptAnswer {
            id: "a1".into(),
            question_id: "q3".into(),
            prompt: None,
            answer: None,
            is_correct: None,
            points_awarded: None,
            max_points: 5.0,
            feedback: None,
            manual_grading: true,
        };
        assert!(answer.awaiting_grade());
        answer.points_awarded = Some(3.0);
        assert!(!answer.awaiting_grade());
    }
}

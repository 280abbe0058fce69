//! Modelo de lo que pinta cada tipo de pregunta.
//!
//! `QuestionView::build` resuelve qué widget toca y con qué contenido; la
//! capa egui (`ui::views::question`) solo dibuja y devuelve la nueva respuesta.

use crate::model::{AnswerData, Question, QuestionKind};

/// Límite blando de caracteres del campo de completar.
pub const FILL_BLANK_SOFT_CAP: usize = 200;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCountStatus {
    Ok,
    BelowMinimum { min: usize },
    AboveMaximum { max: usize },
}

impl WordCountStatus {
    pub fn evaluate(words: usize, min: Option<usize>, max: Option<usize>) -> Self {
        match (min, max) {
            (Some(min), _) if words < min => WordCountStatus::BelowMinimum { min },
            (_, Some(max)) if words > max => WordCountStatus::AboveMaximum { max },
            _ => WordCountStatus::Ok,
        }
    }

    /// Aviso no bloqueante; el alumno puede enviar igualmente.
    pub fn warning(&self, words: usize) -> Option<String> {
        match self {
            WordCountStatus::Ok => None,
            WordCountStatus::BelowMinimum { min } => Some(format!(
                "⚠ {words} palabras: se esperan al menos {min}"
            )),
            WordCountStatus::AboveMaximum { max } => Some(format!(
                "⚠ {words} palabras: el máximo recomendado es {max}"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow<'a> {
    pub id: &'a str,
    pub text: &'a str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionView<'a> {
    MultipleChoice {
        options: Vec<OptionRow<'a>>,
    },
    TrueFalse {
        selected: Option<bool>,
    },
    FillBlank {
        text: String,
    },
    Essay {
        text: String,
        words: usize,
        status: WordCountStatus,
    },
    Code {
        code: String,
        language: Option<&'a str>,
    },
    Unsupported,
}

impl<'a> QuestionView<'a> {
    /// Una respuesta que no encaja con el tipo de la pregunta se ignora.
    pub fn build(question: &'a Question, answer: Option<&AnswerData>) -> Self {
        match &question.kind {
            QuestionKind::MultipleChoice { options } => {
                let selected = match answer {
                    Some(AnswerData::SelectedOption { option_id }) => Some(option_id.as_str()),
                    _ => None,
                };
                QuestionView::MultipleChoice {
                    options: options
                        .iter()
                        .map(|o| OptionRow {
                            id: &o.id,
                            text: &o.text,
                            selected: selected == Some(o.id.as_str()),
                        })
                        .collect(),
                }
            }
            QuestionKind::TrueFalse { .. } => QuestionView::TrueFalse {
                selected: match answer {
                    Some(AnswerData::Boolean { value }) => Some(*value),
                    _ => None,
                },
            },
            QuestionKind::FillBlank { .. } => QuestionView::FillBlank {
                text: match answer {
                    Some(AnswerData::FillBlank { text }) => text.clone(),
                    _ => String::new(),
                },
            },
            QuestionKind::Essay { min_words, max_words } => {
                let text = match answer {
                    Some(AnswerData::Essay { text }) => text.clone(),
                    _ => String::new(),
                };
                let words = word_count(&text);
                QuestionView::Essay {
                    status: WordCountStatus::evaluate(words, *min_words, *max_words),
                    words,
                    text,
                }
            }
            QuestionKind::CodeChallenge { language, starter_code } => {
                let code = match answer {
                    Some(AnswerData::Code { code }) => code.clone(),
                    _ => starter_code.clone().unwrap_or_default(),
                };
                QuestionView::Code {
                    code,
                    language: language.as_deref(),
                }
            }
            QuestionKind::Unsupported => QuestionView::Unsupported,
        }
    }
}

/// Construye la respuesta a partir del texto editado en un widget de texto.
/// Devuelve `None` para tipos que no se editan como texto.
pub fn text_answer(kind: &QuestionKind, text: String) -> Option<AnswerData> {
    match kind {
        QuestionKind::FillBlank { .. } => Some(AnswerData::FillBlank { text }),
        QuestionKind::Essay { .. } => Some(AnswerData::Essay { text }),
        QuestionKind::CodeChallenge { .. } => Some(AnswerData::Code { code: text }),
        QuestionKind::MultipleChoice { .. }
        | QuestionKind::TrueFalse { .. }
        | QuestionKind::Unsupported => None,
    }
}

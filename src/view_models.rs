// src/view_models.rs

use crate::attempts::AttemptStatus;
use crate::model::{Attempt, AttemptAnswer};
use crate::session::QuizSession;

#[derive(Clone, Debug, PartialEq)]
pub struct AttemptRow {
    pub id: String,
    pub number: usize, // número "humano" del intento (1,2,3…)
    pub started: String,
    pub score: String,
    pub status: AttemptStatus,
}

impl AttemptRow {
    pub fn from_history(history: &[Attempt]) -> Vec<AttemptRow> {
        let mut sorted: Vec<&Attempt> = history.iter().collect();
        sorted.sort_by_key(|a| a.started_at);
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, a)| AttemptRow {
                id: a.id.clone(),
                number: i + 1,
                started: a.started_at.format("%d/%m/%Y %H:%M").to_string(),
                score: score_label(a),
                status: AttemptStatus::of(a),
            })
            .collect()
    }
}

pub fn score_label(attempt: &Attempt) -> String {
    match (attempt.score, attempt.max_score, attempt.percentage) {
        (Some(s), Some(m), Some(p)) => format!("{s} / {m} ({p:.0}%)"),
        (Some(s), Some(m), None) => format!("{s} / {m}"),
        _ => "—".to_string(),
    }
}

/// Celda de la paleta de preguntas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteCell {
    pub index: usize,
    pub current: bool,
    pub answered: bool,
    pub bookmarked: bool,
}

impl PaletteCell {
    pub fn for_session(session: &QuizSession) -> Vec<PaletteCell> {
        session
            .questions()
            .iter()
            .enumerate()
            .map(|(index, q)| PaletteCell {
                index,
                current: index == session.current_index(),
                answered: session.is_answered(&q.id),
                bookmarked: session.is_bookmarked(&q.id),
            })
            .collect()
    }

    pub fn label(&self) -> String {
        let mark = if self.bookmarked {
            "🔖"
        } else if self.answered {
            "✔"
        } else {
            ""
        };
        format!("{}{}", self.index + 1, mark)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRow {
    pub prompt: String,
    pub answer: String,
    pub result: String,
    pub points: String,
    pub feedback: Option<String>,
}

impl ReviewRow {
    pub fn from_answer(a: &AttemptAnswer) -> Self {
        let result = if a.awaiting_grade() {
            "📝 Pendiente de revisión"
        } else {
            match a.is_correct {
                Some(true) => "✅ Correcta",
                Some(false) => "❌ Incorrecta",
                None => "—",
            }
        };
        ReviewRow {
            prompt: a.prompt.clone().unwrap_or_else(|| a.question_id.clone()),
            answer: a
                .answer
                .as_ref()
                .map(|d| d.summary())
                .unwrap_or_else(|| "Sin responder".to_string()),
            result: result.to_string(),
            points: match a.points_awarded {
                Some(p) => format!("{p} / {}", a.max_points),
                None => format!("? / {}", a.max_points),
            },
            feedback: a.feedback.clone(),
        }
    }
}

/// Formato mm:ss para el contador del quiz.
pub fn clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

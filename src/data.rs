// src/data.rs

use crate::error::DataError;
use crate::model::QuizBundle;

/// Carga el quiz de demostración embebido (modo sin conexión).
pub fn read_demo_quiz() -> Result<QuizBundle, DataError> {
    let file_content = include_str!("data/demo_quiz.yaml");
    Ok(serde_yaml::from_str(file_content)?)
}

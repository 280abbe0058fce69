use crate::code_utils::{language_badge, syntax_for};
use crate::model::{AnswerData, Question};
use crate::render::{FILL_BLANK_SOFT_CAP, QuestionView, text_answer};
use crate::ui::layout::code_editor_input;
use egui::{Button, RichText, ScrollArea, TextEdit, Ui};

/// Dibuja el widget de respuesta de la pregunta. Devuelve la nueva respuesta
/// solo en el frame en que el alumno la cambia.
pub fn question_widget(
    ui: &mut Ui,
    question: &Question,
    answer: Option<&AnswerData>,
    width: f32,
) -> Option<AnswerData> {
    // Enunciado con scroll fijo
    ScrollArea::vertical()
        .id_salt(("prompt", &question.id))
        .max_height(150.0)
        .show(ui, |ui| {
            ui.set_width(width);
            ui.label(RichText::new(&question.prompt).size(16.0));
        });
    ui.add_space(8.0);

    match QuestionView::build(question, answer) {
        QuestionView::MultipleChoice { options } => {
            let mut picked = None;
            for option in &options {
                if ui.radio(option.selected, option.text).clicked() && !option.selected {
                    picked = Some(AnswerData::SelectedOption {
                        option_id: option.id.to_string(),
                    });
                }
            }
            picked
        }
        QuestionView::TrueFalse { selected } => {
            let mut picked = None;
            let btn_w = ((width - 8.0) / 2.0).max(80.0);
            ui.horizontal(|ui| {
                for (value, label) in [(true, "✔ Verdadero"), (false, "✖ Falso")] {
                    let button = Button::new(RichText::new(label).size(16.0)).selected(selected == Some(value));
                    if ui.add_sized([btn_w, 44.0], button).clicked() {
                        picked = Some(AnswerData::Boolean { value });
                    }
                }
            });
            picked
        }
        QuestionView::FillBlank { mut text } => {
            let changed = ui
                .add(
                    TextEdit::singleline(&mut text)
                        .char_limit(FILL_BLANK_SOFT_CAP)
                        .hint_text("Escribe tu respuesta")
                        .desired_width(width),
                )
                .changed();
            if changed { text_answer(&question.kind, text) } else { None }
        }
        QuestionView::Essay { mut text, words, status } => {
            let changed = ui
                .add(
                    TextEdit::multiline(&mut text)
                        .desired_rows(10)
                        .hint_text("Desarrolla tu respuesta")
                        .desired_width(width),
                )
                .changed();
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{words} palabras")).weak());
                if let Some(warning) = status.warning(words) {
                    ui.label(RichText::new(warning).color(egui::Color32::YELLOW));
                }
            });
            if changed { text_answer(&question.kind, text) } else { None }
        }
        QuestionView::Code { mut code, language } => {
            if let Some(badge) = language_badge(language) {
                ui.label(RichText::new(badge).monospace().strong());
            }
            let fontsize = editor_font_size(ui.style());
            let changed = code_editor_input(
                ui,
                &format!("code_{}", question.id),
                width,
                15,
                fontsize,
                syntax_for(language),
                &mut code,
                245.0,
            );
            if changed { text_answer(&question.kind, code) } else { None }
        }
        QuestionView::Unsupported => {
            ui.label(
                RichText::new("Este tipo de pregunta no se puede responder en esta versión.")
                    .italics()
                    .weak(),
            );
            None
        }
    }
}

/// Tamaño de letra del editor de código: el mismo que el estilo monoespaciado.
pub(crate) fn editor_font_size(style: &egui::Style) -> f32 {
    egui::TextStyle::Monospace.resolve(style).size
}

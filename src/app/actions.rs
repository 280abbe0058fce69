use super::*;
use crate::attempts::StartAvailability;
use crate::data::read_demo_quiz;
use crate::submission::SubmitAttemptRequest;
use chrono::Utc;

impl QuizApp {
    pub fn open_quiz(&mut self, quiz_id: &str) {
        let quiz_id = quiz_id.trim();
        if quiz_id.is_empty() {
            self.toasts.error("Indica el identificador del quiz");
            return;
        }
        self.settings.last_quiz_id = quiz_id.to_string();
        self.demo_mode = false;
        self.enter_loading();
        self.send(ApiRequest::FetchQuiz {
            quiz_id: quiz_id.to_string(),
        });
    }

    pub fn open_lesson_quiz(&mut self, lesson_id: &str) {
        let lesson_id = lesson_id.trim();
        if lesson_id.is_empty() {
            self.toasts.error("Indica el identificador de la lección");
            return;
        }
        self.settings.last_lesson_id = lesson_id.to_string();
        self.demo_mode = false;
        self.enter_loading();
        self.send(ApiRequest::FetchLessonQuiz {
            lesson_id: lesson_id.to_string(),
        });
    }

    pub fn open_demo(&mut self) {
        match read_demo_quiz() {
            Ok(bundle) => {
                self.reset_quiz_state();
                self.demo_mode = true;
                self.quiz = Some(bundle);
                self.state = AppState::QuizIntro;
            }
            Err(err) => {
                log::error!("{err}");
                self.toasts.error("No se pudo cargar el quiz de demostración");
            }
        }
    }

    /// Vuelve a pedir el historial de intentos (tras un fallo al cargarlo).
    pub fn reload_history(&mut self) {
        let Some(quiz_id) = self.quiz.as_ref().map(|b| b.quiz.id.clone()) else {
            return;
        };
        if self.demo_mode || self.history_loaded {
            return;
        }
        self.send(ApiRequest::MyAttempts { quiz_id });
    }

    fn enter_loading(&mut self) {
        self.load_error = None;
        self.state = AppState::Loading;
    }

    /// Empieza (o retoma) un intento respetando el límite de intentos conocido.
    pub fn start_quiz(&mut self) {
        let Some(quiz_id) = self.quiz.as_ref().map(|b| b.quiz.id.clone()) else {
            return;
        };
        if self.demo_mode {
            self.begin_session(None);
            return;
        }
        match self.start_availability() {
            StartAvailability::Waiting => {
                log::debug!("start ignored: history not loaded or a start is in flight");
            }
            StartAvailability::Exhausted => {
                self.toasts.error("No te quedan intentos para este quiz");
            }
            StartAvailability::Resume { attempt_id } => {
                let open = self.history.iter().find(|a| a.id == attempt_id).cloned();
                self.toasts.info("Retomando tu intento abierto");
                self.begin_session(open);
            }
            StartAvailability::Start => {
                self.starting = true;
                self.send(ApiRequest::StartAttempt { quiz_id });
            }
        }
    }

    /// Crea la sesión en memoria y pasa a la pantalla del quiz.
    pub fn begin_session(&mut self, attempt: Option<Attempt>) {
        let Some(bundle) = self.quiz.clone() else {
            return;
        };
        match QuizSession::new(bundle) {
            Ok(session) => {
                self.session = Some(session);
                self.attempt = attempt;
                self.timer.stop();
                self.submitting = false;
                self.auto_submitted = false;
                self.confirm_submit = false;
                self.confirm_leave = false;
                self.state = AppState::Quiz;
            }
            Err(err) => {
                log::warn!("cannot open session: {err}");
                self.toasts.error("Este quiz no tiene preguntas");
            }
        }
    }

    pub fn request_submit(&mut self) {
        if self.session.is_some() && !self.submitting {
            self.confirm_submit = true;
        }
    }

    /// Serializa la sesión y la envía. Si falla, la sesión queda intacta para
    /// poder reintentar a mano.
    pub fn submit_attempt(&mut self) {
        self.confirm_submit = false;
        let Some(session) = &self.session else {
            return;
        };
        let payload = SubmitAttemptRequest::from_session(session);
        let summary = SubmitSummary::from_session(session);
        self.last_summary = Some(summary);

        if self.demo_mode {
            self.finish_demo_attempt(&payload);
            return;
        }

        let Some(attempt) = &self.attempt else {
            log::error!("submit without an open attempt");
            self.toasts.error("No se pudo enviar el intento");
            return;
        };
        log::info!(
            "submitting attempt {} with {} answers",
            attempt.id,
            payload.answers.len()
        );
        self.submitting = true;
        let attempt_id = attempt.id.clone();
        self.send(ApiRequest::SubmitAttempt {
            attempt_id,
            payload,
        });
    }

    fn finish_demo_attempt(&mut self, payload: &SubmitAttemptRequest) {
        let quiz_id = self
            .quiz
            .as_ref()
            .map(|b| b.quiz.id.clone())
            .unwrap_or_default();
        let now = Utc::now();
        let elapsed = chrono::Duration::seconds(payload.time_spent_seconds as i64);
        self.last_result = Some(Attempt {
            id: format!("demo-{}", now.timestamp()),
            user_id: "demo".into(),
            quiz_id,
            started_at: now - elapsed,
            submitted_at: Some(now),
            score: None,
            max_score: None,
            percentage: None,
            passed: None,
            in_progress: false,
        });
        self.close_session();
        self.state = AppState::Result;
        self.toasts.info("Modo demo: las respuestas no se envían al servidor");
    }

    /// Abandona el quiz: lo respondido se pierde.
    pub fn leave_quiz(&mut self) {
        self.confirm_leave = false;
        self.close_session();
        self.state = AppState::QuizIntro;
        self.toasts.info("Has salido del quiz; tus respuestas se han descartado");
    }

    pub(crate) fn close_session(&mut self) {
        self.session = None;
        self.timer.stop();
        self.submitting = false;
        self.confirm_submit = false;
        self.confirm_leave = false;
    }

    pub fn open_review(&mut self, attempt_id: &str) {
        self.open_detail(attempt_id, DetailTarget::Review);
    }

    pub fn open_grading(&mut self, attempt_id: &str) {
        self.open_detail(attempt_id, DetailTarget::Grading);
    }

    fn open_detail(&mut self, attempt_id: &str, target: DetailTarget) {
        let attempt_id = attempt_id.trim();
        if attempt_id.is_empty() {
            self.toasts.error("Indica el identificador del intento");
            return;
        }
        self.detail_target = Some(target);
        self.enter_loading();
        self.send(ApiRequest::AttemptDetail {
            attempt_id: attempt_id.to_string(),
        });
    }

    /// Valida y envía la nota de una respuesta. Cada respuesta va por separado.
    pub fn save_grade(&mut self, answer_id: &str) {
        let Some(panel) = &self.grading else {
            return;
        };
        match panel.prepare(answer_id) {
            Ok(grade) => {
                let attempt_id = panel.attempt_id().to_string();
                self.send(ApiRequest::GradeAnswer {
                    attempt_id,
                    answer_id: answer_id.to_string(),
                    grade,
                });
            }
            Err(err) => {
                log::debug!("grade rejected on the client: {err}");
                self.toasts.error(err.user_message());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn upload_asset(&mut self) {
        use crate::api::AssetUpload;
        use std::path::Path;
        use std::sync::Arc;

        let lesson_id = self.uploads.lesson_id.trim().to_string();
        let path = self.uploads.path.trim().to_string();
        if lesson_id.is_empty() || path.is_empty() {
            self.toasts.error("Indica la lección y el archivo");
            return;
        }
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("cannot read {path}: {err}");
                self.toasts.error("No se pudo leer el archivo");
                return;
            }
        };
        let file_name = Path::new(&path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());
        let upload = AssetUpload {
            mime: mime_for(&file_name).to_string(),
            file_name,
            bytes: Arc::new(bytes),
        };
        self.uploads.last_url = None;
        let kind = self.uploads.kind;
        self.send(ApiRequest::UploadAsset {
            lesson_id,
            kind,
            upload,
        });
    }
}

/// Tipo MIME por extensión para las subidas de recursos de lección.
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "vtt" => "text/vtt",
        "srt" => "application/x-subrip",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

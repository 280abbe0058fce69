use crate::api::{ApiClient, ApiRequest};
use crate::config::{ClientConfig, Settings};
use crate::grading::GradingPanel;
use crate::model::{AppState, AssetKind, Attempt, AttemptAnswer, AttemptDetail, QuizBundle};
use crate::session::{QuestionTimer, QuizSession};
use crate::submission::SubmitSummary;
use crate::toast::Toasts;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod responses;

/// A qué pantalla va el detalle de intento que estamos esperando.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DetailTarget {
    Review,
    Grading,
}

#[derive(Clone, Debug)]
pub struct UploadForm {
    pub lesson_id: String,
    pub kind: AssetKind,
    pub path: String,
    pub last_url: Option<String>,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            lesson_id: String::new(),
            kind: AssetKind::Video,
            path: String::new(),
            last_url: None,
        }
    }
}

pub struct QuizApp {
    pub settings: Settings,
    pub state: AppState,
    pub api: ApiClient,
    pub toasts: Toasts,
    pub now: f64,

    // Quiz cargado e historial de intentos
    pub quiz: Option<QuizBundle>,
    pub history: Vec<Attempt>,
    pub history_loaded: bool,
    pub demo_mode: bool,
    pub load_error: Option<String>,

    // Intento en curso
    pub attempt: Option<Attempt>,
    pub session: Option<QuizSession>,
    pub timer: QuestionTimer,
    pub starting: bool,
    pub submitting: bool,
    pub auto_submitted: bool,
    pub confirm_submit: bool,
    pub confirm_leave: bool,

    // Resultado / revisión / corrección
    pub last_result: Option<Attempt>,
    pub last_summary: Option<SubmitSummary>,
    pub detail_target: Option<DetailTarget>,
    pub review: Option<AttemptDetail>,
    pub grading: Option<GradingPanel>,

    // Entradas de la pantalla de inicio
    pub attempt_id_input: String,
    pub uploads: UploadForm,
}

impl QuizApp {
    pub fn new(config: ClientConfig, settings: Settings) -> Self {
        Self {
            settings,
            state: AppState::Home,
            api: ApiClient::new(config),
            toasts: Toasts::default(),
            now: 0.0,
            quiz: None,
            history: Vec::new(),
            history_loaded: false,
            demo_mode: false,
            load_error: None,
            attempt: None,
            session: None,
            timer: QuestionTimer::new(),
            starting: false,
            submitting: false,
            auto_submitted: false,
            confirm_submit: false,
            confirm_leave: false,
            last_result: None,
            last_summary: None,
            detail_target: None,
            review: None,
            grading: None,
            attempt_id_input: String::new(),
            uploads: UploadForm::default(),
        }
    }

    /// Entrada única para todas las peticiones; en modo demo no sale nada a red.
    pub(crate) fn send(&mut self, request: ApiRequest) {
        if self.demo_mode {
            log::debug!("demo mode: skipping {}", request.describe());
            return;
        }
        self.api.dispatch(request);
    }

    /// Avanza relojes: avisos, contador por pregunta y límite de tiempo.
    pub fn tick(&mut self, now: f64) {
        self.now = now;
        self.toasts.advance(now);

        if self.state != AppState::Quiz {
            self.timer.stop();
            return;
        }
        let Some(session) = self.session.as_mut() else {
            self.timer.stop();
            return;
        };
        self.timer.drive(session, now);

        if session.is_time_up() && !self.auto_submitted && !self.submitting {
            log::info!("time limit reached, submitting automatically");
            self.auto_submitted = true;
            self.toasts.info("⏰ Se acabó el tiempo: enviando tus respuestas");
            self.submit_attempt();
        }
    }

    /// Procesa las respuestas del backend que hayan llegado.
    pub fn pump_api(&mut self) {
        for event in self.api.poll() {
            self.handle_api_event(event);
        }
    }
}

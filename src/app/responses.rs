use super::*;
use crate::api::{ApiEvent, ApiResponse};
use crate::error::ApiError;

impl QuizApp {
    pub fn handle_api_event(&mut self, event: ApiEvent) {
        let ApiEvent { request, result } = event;
        match (request, result) {
            // ---- Lecturas: si fallan se queda la pantalla de carga con el aviso ----
            (ApiRequest::FetchQuiz { .. } | ApiRequest::FetchLessonQuiz { .. }, result) => {
                match result {
                    Ok(ApiResponse::Quiz(bundle)) => self.on_quiz_loaded(bundle),
                    Ok(other) => self.unexpected(other),
                    Err(err) => self.on_read_failed(&err),
                }
            }
            (ApiRequest::MyAttempts { quiz_id }, result) => match result {
                Ok(ApiResponse::Attempts(list)) => {
                    if self.loaded_quiz_id() == Some(quiz_id.as_str()) {
                        self.history = list;
                        self.history_loaded = true;
                    }
                }
                Ok(other) => self.unexpected(other),
                // sin historial el botón de empezar sigue bloqueado; la vista ofrece reintentar
                Err(err) => log::warn!("attempt history unavailable: {err}"),
            },
            (ApiRequest::AttemptDetail { .. }, result) => match result {
                Ok(ApiResponse::AttemptDetail(detail)) => self.on_detail_loaded(detail),
                Ok(other) => self.unexpected(other),
                Err(err) => self.on_read_failed(&err),
            },

            // ---- Mutaciones: siempre aviso de éxito o de fallo ----
            (ApiRequest::StartAttempt { .. }, result) => {
                self.starting = false;
                match result {
                    Ok(ApiResponse::Attempt(attempt)) => {
                        self.toasts.success("Intento iniciado");
                        self.history.push(attempt.clone());
                        self.begin_session(Some(attempt));
                    }
                    Ok(other) => self.unexpected(other),
                    Err(err) => self.mutation_failed("No se pudo iniciar el intento", &err),
                }
            }
            (ApiRequest::SubmitAttempt { attempt_id, .. }, result) => {
                self.submitting = false;
                match result {
                    Ok(ApiResponse::Attempt(attempt)) => self.on_submitted(attempt),
                    Ok(other) => self.unexpected(other),
                    Err(err) => {
                        log::warn!("submit of {attempt_id} failed, answers kept in memory");
                        self.mutation_failed("No se pudo enviar el intento", &err);
                    }
                }
            }
            (ApiRequest::GradeAnswer { .. }, result) => match result {
                Ok(ApiResponse::GradedAnswer(answer)) => self.on_graded(answer),
                Ok(other) => self.unexpected(other),
                Err(err) => self.mutation_failed("No se pudo guardar la calificación", &err),
            },
            (ApiRequest::UploadAsset { .. }, result) => match result {
                Ok(ApiResponse::Uploaded(asset)) => {
                    self.toasts.success("Archivo subido");
                    self.uploads.last_url = Some(asset.url);
                }
                Ok(other) => self.unexpected(other),
                Err(err) => self.mutation_failed("No se pudo subir el archivo", &err),
            },
        }
    }

    fn loaded_quiz_id(&self) -> Option<&str> {
        self.quiz.as_ref().map(|b| b.quiz.id.as_str())
    }

    fn on_quiz_loaded(&mut self, bundle: QuizBundle) {
        let quiz_id = bundle.quiz.id.clone();
        log::info!("quiz {quiz_id} loaded with {} questions", bundle.questions.len());
        self.reset_quiz_state();
        self.settings.last_quiz_id = quiz_id.clone();
        self.quiz = Some(bundle);
        self.state = AppState::QuizIntro;
        self.send(ApiRequest::MyAttempts { quiz_id });
    }

    fn on_detail_loaded(&mut self, detail: AttemptDetail) {
        match self.detail_target.take() {
            Some(DetailTarget::Grading) => {
                self.grading = Some(GradingPanel::open(detail));
                self.state = AppState::Grading;
            }
            Some(DetailTarget::Review) | None => {
                self.review = Some(detail);
                self.state = AppState::Review;
            }
        }
    }

    fn on_submitted(&mut self, attempt: Attempt) {
        self.toasts.success("Intento enviado");
        if let Some(slot) = self.history.iter_mut().find(|a| a.id == attempt.id) {
            *slot = attempt.clone();
        } else {
            self.history.push(attempt.clone());
        }
        self.attempt = None;
        self.last_result = Some(attempt);
        self.close_session();
        self.state = AppState::Result;
    }

    fn on_graded(&mut self, answer: AttemptAnswer) {
        let Some(panel) = self.grading.as_mut() else {
            log::warn!("grade for {} arrived with no grading panel open", answer.id);
            return;
        };
        panel.apply_graded(answer);
        self.toasts.success("Calificación guardada");
        if panel.is_fully_graded() {
            let attempt_id = panel.attempt_id().to_string();
            self.toasts.info("Intento corregido por completo");
            // refresca nota y aprobado calculados por el backend
            self.detail_target = Some(DetailTarget::Grading);
            self.send(ApiRequest::AttemptDetail { attempt_id });
        }
    }

    fn on_read_failed(&mut self, err: &ApiError) {
        log::warn!("read failed: {err}");
        self.load_error = Some(err.user_message().to_string());
    }

    fn mutation_failed(&mut self, action: &str, err: &ApiError) {
        log::warn!("{action}: {err}");
        self.toasts.error(format!("{action}. {}", err.user_message()));
    }

    fn unexpected(&mut self, response: ApiResponse) {
        log::error!("unexpected response shape: {response:?}");
        self.toasts.error("Respuesta inesperada del servidor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app, app_with_quiz};
    use crate::attempts::StartAvailability;
    use crate::model::AnswerData;
    use crate::session::tests::three_question_bundle;
    use crate::submission::SubmitAttemptRequest;
    use crate::toast::ToastKind;
    use chrono::Utc;

    fn attempt(id: &str) -> Attempt {
        Attempt {
            id: id.into(),
            user_id: "u1".into(),
            quiz_id: "quiz-1".into(),
            started_at: Utc::now(),
            submitted_at: None,
            score: None,
            max_score: None,
            percentage: None,
            passed: None,
            in_progress: true,
        }
    }

    fn submit_event(attempt_id: &str, result: Result<ApiResponse, ApiError>) -> ApiEvent {
        ApiEvent {
            request: ApiRequest::SubmitAttempt {
                attempt_id: attempt_id.into(),
                payload: SubmitAttemptRequest {
                    answers: vec![],
                    bookmarked_question_ids: vec![],
                    time_spent_seconds: 0,
                },
            },
            result,
        }
    }

    #[test]
    fn loaded_quiz_opens_intro() {
        let mut a = app();
        a.state = AppState::Loading;
        a.handle_api_event(ApiEvent {
            request: ApiRequest::FetchQuiz { quiz_id: "quiz-1".into() },
            result: Ok(ApiResponse::Quiz(three_question_bundle())),
        });
        assert_eq!(a.state, AppState::QuizIntro);
        assert_eq!(a.settings.last_quiz_id, "quiz-1");
        // se pide el historial a continuación
        assert!(a.api.is_busy());
    }

    #[test]
    fn failed_read_keeps_loading_screen_without_toast() {
        let mut a = app();
        a.state = AppState::Loading;
        a.handle_api_event(ApiEvent {
            request: ApiRequest::FetchLessonQuiz { lesson_id: "l1".into() },
            result: Err(ApiError::Network("refused".into())),
        });
        assert_eq!(a.state, AppState::Loading);
        assert_eq!(a.load_error.as_deref(), Some("Sin conexión con el servidor"));
        assert!(a.toasts.is_empty());
    }

    #[test]
    fn started_attempt_opens_session() {
        let mut a = app_with_quiz();
        a.handle_api_event(ApiEvent {
            request: ApiRequest::StartAttempt { quiz_id: "quiz-1".into() },
            result: Ok(ApiResponse::Attempt(attempt("att-1"))),
        });
        assert_eq!(a.state, AppState::Quiz);
        assert_eq!(a.attempt.as_ref().unwrap().id, "att-1");
        assert_eq!(a.history.len(), 1);
        assert_eq!(a.toasts.last().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn failed_submit_keeps_answers_for_retry() {
        let mut a = app_with_quiz();
        a.begin_session(Some(attempt("att-1")));
        a.set_current_answer(AnswerData::SelectedOption { option_id: "B".into() });
        a.submitting = true;

        a.handle_api_event(submit_event(
            "att-1",
            Err(ApiError::Http { status: 502, url: String::new(), body: String::new() }),
        ));

        assert_eq!(a.state, AppState::Quiz);
        assert!(!a.submitting);
        assert!(a.session.as_ref().unwrap().is_answered("q1"));
        let toast = a.toasts.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.text.starts_with("No se pudo enviar el intento"));
        assert!(!toast.text.contains("502"));
    }

    #[test]
    fn successful_submit_shows_result_and_updates_history() {
        let mut a = app_with_quiz();
        a.history.push(attempt("att-1"));
        a.begin_session(Some(attempt("att-1")));

        let mut graded = attempt("att-1");
        graded.in_progress = false;
        graded.submitted_at = Some(Utc::now());
        graded.score = Some(2.0);
        a.handle_api_event(submit_event("att-1", Ok(ApiResponse::Attempt(graded))));

        assert_eq!(a.state, AppState::Result);
        assert!(a.session.is_none());
        assert_eq!(a.history.len(), 1);
        assert!(!a.history[0].in_progress);
        assert_eq!(a.last_result.as_ref().unwrap().score, Some(2.0));
    }

    #[test]
    fn pump_routes_channel_events_to_handlers() {
        let mut a = app_with_quiz();
        a.api.inject(ApiEvent {
            request: ApiRequest::MyAttempts { quiz_id: "quiz-1".into() },
            result: Ok(ApiResponse::Attempts(vec![attempt("att-1")])),
        });
        a.pump_api();
        assert!(!a.api.is_busy());
        assert_eq!(a.history.len(), 1);
        // intento abierto en el historial: se retoma en vez de crear otro
        assert!(matches!(
            a.start_availability(),
            StartAvailability::Resume { .. }
        ));
    }

    #[test]
    fn start_is_blocked_until_history_arrives() {
        let mut a = app();
        let mut bundle = three_question_bundle();
        bundle.quiz.max_attempts = Some(1);
        a.handle_api_event(ApiEvent {
            request: ApiRequest::FetchQuiz { quiz_id: "quiz-1".into() },
            result: Ok(ApiResponse::Quiz(bundle)),
        });
        assert_eq!(a.api.in_flight(), 1);
        assert_eq!(a.start_availability(), StartAvailability::Waiting);

        a.start_quiz();
        a.start_quiz();
        // solo sigue en vuelo la petición del historial
        assert_eq!(a.api.in_flight(), 1);

        let mut used = attempt("att-1");
        used.in_progress = false;
        a.handle_api_event(ApiEvent {
            request: ApiRequest::MyAttempts { quiz_id: "quiz-1".into() },
            result: Ok(ApiResponse::Attempts(vec![used])),
        });
        assert_eq!(a.start_availability(), StartAvailability::Exhausted);
        a.start_quiz();
        assert_eq!(a.api.in_flight(), 1);
    }

    #[test]
    fn double_click_on_start_sends_one_request() {
        let mut a = app_with_quiz();
        a.start_quiz();
        a.start_quiz();
        assert_eq!(a.api.in_flight(), 1);
        assert!(a.starting);
        assert!(!a.start_availability().enabled());

        a.handle_api_event(ApiEvent {
            request: ApiRequest::StartAttempt { quiz_id: "quiz-1".into() },
            result: Err(ApiError::Network("refused".into())),
        });
        assert!(!a.starting);
        assert_eq!(a.state, AppState::QuizIntro);
        assert_eq!(a.start_availability(), StartAvailability::Start);
    }

    #[test]
    fn graded_answer_lands_in_the_open_panel() {
        let mut a = app();
        let mut submitted = attempt("att-1");
        submitted.in_progress = false;
        let pending = AttemptAnswer {
            id: "ans-1".into(),
            question_id: "q3".into(),
            prompt: None,
            answer: Some(AnswerData::Essay { text: "texto".into() }),
            is_correct: None,
            points_awarded: None,
            max_points: 5.0,
            feedback: None,
            manual_grading: true,
        };
        a.grading = Some(GradingPanel::open(AttemptDetail {
            attempt: submitted,
            answers: vec![pending.clone()],
        }));

        let graded = AttemptAnswer {
            points_awarded: Some(4.0),
            feedback: Some("Bien argumentado".into()),
            ..pending
        };
        a.handle_api_event(ApiEvent {
            request: ApiRequest::GradeAnswer {
                attempt_id: "att-1".into(),
                answer_id: "ans-1".into(),
                grade: crate::grading::GradeAnswerRequest { points: 4.0, feedback: None },
            },
            result: Ok(ApiResponse::GradedAnswer(graded)),
        });

        let panel = a.grading.as_ref().unwrap();
        assert!(panel.is_fully_graded());
        assert_eq!(panel.pending_count(), 0);
        // con todo corregido se vuelve a pedir el detalle
        assert_eq!(a.detail_target, Some(DetailTarget::Grading));
        assert_eq!(a.api.in_flight(), 1);
    }

    #[test]
    fn stale_history_for_other_quiz_is_ignored() {
        let mut a = app_with_quiz();
        a.handle_api_event(ApiEvent {
            request: ApiRequest::MyAttempts { quiz_id: "otro".into() },
            result: Ok(ApiResponse::Attempts(vec![attempt("x")])),
        });
        assert!(a.history.is_empty());
    }

    #[test]
    fn detail_goes_to_grading_when_requested() {
        let mut a = app();
        a.detail_target = Some(DetailTarget::Grading);
        a.handle_api_event(ApiEvent {
            request: ApiRequest::AttemptDetail { attempt_id: "att-1".into() },
            result: Ok(ApiResponse::AttemptDetail(AttemptDetail {
                attempt: attempt("att-1"),
                answers: vec![],
            })),
        });
        assert_eq!(a.state, AppState::Grading);
        assert!(a.grading.is_some());
        assert!(a.detail_target.is_none());
    }
}

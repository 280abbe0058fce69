//! Llamadas REST al backend del LMS.
//!
//! Cada petición se ejecuta fuera del hilo de la UI (un hilo en nativo,
//! `spawn_local` en web) y el resultado vuelve por un canal que la app
//! consulta en cada frame con [`ApiClient::poll`].

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::grading::GradeAnswerRequest;
use crate::model::{
    AssetKind, Attempt, AttemptAnswer, AttemptDetail, QuizBundle, UploadedAsset,
};
use crate::submission::SubmitAttemptRequest;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// Fichero a subir como `multipart/form-data` (campo `file`).
#[derive(Debug, Clone, PartialEq)]
pub struct AssetUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchQuiz {
        quiz_id: String,
    },
    FetchLessonQuiz {
        lesson_id: String,
    },
    StartAttempt {
        quiz_id: String,
    },
    MyAttempts {
        quiz_id: String,
    },
    AttemptDetail {
        attempt_id: String,
    },
    SubmitAttempt {
        attempt_id: String,
        payload: SubmitAttemptRequest,
    },
    GradeAnswer {
        attempt_id: String,
        answer_id: String,
        grade: GradeAnswerRequest,
    },
    UploadAsset {
        lesson_id: String,
        kind: AssetKind,
        upload: AssetUpload,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Quiz(QuizBundle),
    Attempt(Attempt),
    Attempts(Vec<Attempt>),
    AttemptDetail(AttemptDetail),
    GradedAnswer(AttemptAnswer),
    Uploaded(UploadedAsset),
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        match self {
            ApiRequest::FetchQuiz { .. }
            | ApiRequest::FetchLessonQuiz { .. }
            | ApiRequest::MyAttempts { .. }
            | ApiRequest::AttemptDetail { .. } => Method::Get,
            ApiRequest::StartAttempt { .. }
            | ApiRequest::SubmitAttempt { .. }
            | ApiRequest::UploadAsset { .. } => Method::Post,
            ApiRequest::GradeAnswer { .. } => Method::Patch,
        }
    }

    /// Ruta relativa a la base; cada id va codificado como un segmento.
    pub fn path(&self) -> String {
        match self {
            ApiRequest::FetchQuiz { quiz_id } => format!("/quizzes/{}", segment(quiz_id)),
            ApiRequest::FetchLessonQuiz { lesson_id } => format!("/lessons/{}/quiz", segment(lesson_id)),
            ApiRequest::StartAttempt { quiz_id } => format!("/quizzes/{}/attempts", segment(quiz_id)),
            ApiRequest::MyAttempts { quiz_id } => format!("/quizzes/{}/attempts/me", segment(quiz_id)),
            ApiRequest::AttemptDetail { attempt_id } => format!("/attempts/{}", segment(attempt_id)),
            ApiRequest::SubmitAttempt { attempt_id, .. } => {
                format!("/attempts/{}/submit", segment(attempt_id))
            }
            ApiRequest::GradeAnswer { attempt_id, answer_id, .. } => {
                format!("/attempts/{}/answers/{}/grade", segment(attempt_id), segment(answer_id))
            }
            ApiRequest::UploadAsset { lesson_id, kind, .. } => {
                format!("/lessons/{}/assets/{}", segment(lesson_id), kind.path_segment())
            }
        }
    }

    /// Cuerpo JSON de la petición; `None` para GET y para subidas multipart.
    pub fn json_body(&self) -> Result<Option<String>, ApiError> {
        let body = match self {
            ApiRequest::SubmitAttempt { payload, .. } => serde_json::to_string(payload),
            ApiRequest::GradeAnswer { grade, .. } => serde_json::to_string(grade),
            ApiRequest::StartAttempt { .. } => Ok("{}".to_string()),
            _ => return Ok(None),
        };
        body.map(Some).map_err(|e| ApiError::Request(e.to_string()))
    }

    pub fn decode(&self, body: &str) -> Result<ApiResponse, ApiError> {
        Ok(match self {
            ApiRequest::FetchQuiz { .. } | ApiRequest::FetchLessonQuiz { .. } => {
                ApiResponse::Quiz(decode_json(body)?)
            }
            ApiRequest::StartAttempt { .. } | ApiRequest::SubmitAttempt { .. } => {
                ApiResponse::Attempt(decode_json(body)?)
            }
            ApiRequest::MyAttempts { .. } => ApiResponse::Attempts(decode_json(body)?),
            ApiRequest::AttemptDetail { .. } => ApiResponse::AttemptDetail(decode_json(body)?),
            ApiRequest::GradeAnswer { .. } => ApiResponse::GradedAnswer(decode_json(body)?),
            ApiRequest::UploadAsset { .. } => ApiResponse::Uploaded(decode_json(body)?),
        })
    }

    pub fn describe(&self) -> String {
        format!("{} {}", self.method().as_str(), self.path())
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Acepta el cuerpo tal cual o envuelto en `{"data": ...}`.
fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<T>(body).or_else(|err| {
        serde_json::from_str::<Envelope<T>>(body)
            .map(|e| e.data)
            .map_err(|_| ApiError::Decode(err.to_string()))
    })
}

/// Resultado de una petición, con la petición original para saber a qué
/// pantalla pertenece.
#[derive(Debug, Clone)]
pub struct ApiEvent {
    pub request: ApiRequest,
    pub result: Result<ApiResponse, ApiError>,
}

pub struct ApiClient {
    config: ClientConfig,
    tx: Sender<ApiEvent>,
    rx: Receiver<ApiEvent>,
    in_flight: usize,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        let (tx, rx) = channel();
        Self {
            config,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Peticiones enviadas cuyo resultado aún no se ha recogido.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, request: ApiRequest) {
        log::info!("→ {}", request.describe());
        self.in_flight += 1;
        let tx = self.tx.clone();
        let config = self.config.clone();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = native::execute(&config, &request);
            let _ = tx.send(ApiEvent { request, result });
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = web::execute(&config, &request).await;
            let _ = tx.send(ApiEvent { request, result });
        });
    }

    /// Recoge los resultados que hayan llegado desde el último frame.
    pub fn poll(&mut self) -> Vec<ApiEvent> {
        let events: Vec<ApiEvent> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(events.len());
        for event in &events {
            match &event.result {
                Ok(_) => log::info!("← {} ok", event.request.describe()),
                Err(err) => log::warn!("← {} failed: {err}", event.request.describe()),
            }
        }
        events
    }

    #[cfg(test)]
    pub(crate) fn inject(&mut self, event: ApiEvent) {
        self.in_flight += 1;
        let _ = self.tx.send(event);
    }
}

fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

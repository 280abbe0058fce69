use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
const DEFAULT_API_BASE: &str = "/api";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_API_BASE: &str = "http://127.0.0.1:8080/api";

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Conexión con el backend. Se resuelve al arrancar y no se persiste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: normalize_base(api_base).unwrap_or_else(|| "/".to_string()),
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn resolve() -> Self {
        let config = Self {
            api_base: default_api_base(),
            auth_token: default_auth_token(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        log::info!("API base: {}", config.api_base);
        config
    }

    /// Une la base con una ruta que empieza por `/`.
    pub fn url(&self, path: &str) -> String {
        if self.api_base == "/" {
            return path.to_string();
        }
        format!("{}{}", self.api_base, path)
    }
}

/// Preferencias de la interfaz que sí sobreviven entre ejecuciones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dark_mode: bool,
    #[serde(default)]
    pub last_quiz_id: String,
    #[serde(default)]
    pub last_lesson_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            last_quiz_id: String::new(),
            last_lesson_id: String::new(),
        }
    }
}

fn normalize_base(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed == "/" {
        return Some(trimmed.to_string());
    }
    Some(trimmed.trim_end_matches('/').to_string())
}

#[cfg(target_arch = "wasm32")]
fn default_api_base() -> String {
    base_from_build_env()
        .or_else(base_from_querystring)
        .or_else(base_from_meta)
        .or_else(base_from_local_storage)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn base_from_build_env() -> Option<String> {
    option_env!("CAMPUS_QUIZ_API_BASE").and_then(normalize_base)
}

#[cfg(target_arch = "wasm32")]
fn base_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "api_base" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize_base(&decoded);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn base_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='campus-quiz-api-base']")
        .ok()??;
    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_base)
}

#[cfg(target_arch = "wasm32")]
fn base_from_local_storage() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item("campus_quiz_api_base")
        .ok()?
        .as_deref()
        .and_then(normalize_base)
}

#[cfg(target_arch = "wasm32")]
fn default_auth_token() -> Option<String> {
    // En web la sesión la lleva la cookie del navegador
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> String {
    std::env::var("CAMPUS_QUIZ_API_BASE")
        .ok()
        .and_then(|v| normalize_base(&v))
        .unwrap_or_else(|| DEFAULT_NATIVE_API_BASE.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_auth_token() -> Option<String> {
    std::env::var("CAMPUS_QUIZ_API_TOKEN")
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

use crate::QuizApp;
use crate::config::{ClientConfig, Settings};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Arranca la app sobre el `<canvas id="campus_quiz_canvas">` de la página.
#[wasm_bindgen]
pub async fn start() -> Result<(), JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id("campus_quiz_canvas")
        .ok_or_else(|| JsValue::from_str("canvas #campus_quiz_canvas not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let config = ClientConfig::resolve();
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| {
                let settings: Settings = cc
                    .storage
                    .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
                    .unwrap_or_default();
                Ok(Box::new(QuizApp::new(config, settings)))
            }),
        )
        .await
}

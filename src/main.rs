#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use campus_quiz::QuizApp;
    use campus_quiz::config::{ClientConfig, Settings};

    // RUST_LOG=campus_quiz=debug para ver cada petición
    pretty_env_logger::init();

    let config = ClientConfig::resolve();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Campus Quiz")
            .with_inner_size([900.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Campus Quiz",
        options,
        Box::new(move |cc| {
            let settings: Settings = cc
                .storage
                .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
                .unwrap_or_default();
            Ok(Box::new(QuizApp::new(config, settings)))
        }),
    )
}

// En wasm el arranque lo hace `web::start` desde JS.
#[cfg(target_arch = "wasm32")]
fn main() {}

use pass_quest::TrainingApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Password Quest",
        options,
        Box::new(|_cc| Ok(Box::new(TrainingApp::new()?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document to attach to");
            return;
        };
        let canvas = match document
            .get_element_by_id("pass_quest_canvas")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("missing #pass_quest_canvas element");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(TrainingApp::new()?))),
            )
            .await;
        if let Err(e) = result {
            log::error!("failed to start: {e:?}");
        }
    });
}

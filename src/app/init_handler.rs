// src/app/init_handler.rs
//! GameApp の初期化に関するロジック。

use std::sync::{Arc, Mutex};

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::controller::InteractionController;
use crate::config::{GameConfig, Variant};

/// コントローラーを作って最初の配りまで済ませる。
pub fn initialize_controller(config: GameConfig) -> Arc<Mutex<InteractionController>> {
    info!("App::Init: {:?} で初期化中...", config.variant);
    let mut controller = InteractionController::new(config);
    controller.setup();
    Arc::new(Mutex::new(controller))
}

/// id が `canvas_id` の Canvas を探して、バリアントのウィンドウサイズに合わせる。
pub fn initialize_canvas(
    canvas_id: &str,
    variant: Variant,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas #{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;

    let (width, height) = variant.window_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context is not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    info!("App::Init: Canvas #{} ready ({}x{})", canvas_id, width, height);
    Ok((canvas, context))
}

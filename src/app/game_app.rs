// src/app/game_app.rs

use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::browser_event_manager::{self, Listener};
use super::controller::InteractionController;
use super::{init_handler, renderer, state_getter};
use crate::config::GameConfig;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
// JS からは `new GameApp("canvas", '{"variant":"TenPile"}')` みたいに作る。
#[wasm_bindgen]
pub struct GameApp {
    controller: Arc<Mutex<InteractionController>>,
    // 付けたイベントリスナー。Drop で外す。
    listeners: Vec<Listener>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` は `GameConfig` の JSON (空文字列ならデフォルト)。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: &str) -> Result<GameApp, JsValue> {
        info!("GameApp: 初期化中...");
        let config = GameConfig::from_json(config_json).map_err(js_error)?;
        let (canvas, context) = init_handler::initialize_canvas(canvas_id, config.variant)?;
        let controller = init_handler::initialize_controller(config);
        let listeners = browser_event_manager::attach_listeners(&controller, &canvas, &context)?;

        let app = Self { controller, listeners, canvas, context };
        app.render()?;
        info!("GameApp: 初期化完了。");
        Ok(app)
    }

    /// 今の盤面を Canvas に描く。
    pub fn render(&self) -> Result<(), JsValue> {
        let frame = self.lock()?.on_draw();
        renderer::draw_frame(&self.context, &frame)
    }

    /// 配り直して描き直す。
    pub fn restart(&self) -> Result<(), JsValue> {
        self.lock()?.restart();
        self.render()
    }

    /// 盤面の状態を JSON で返す (デバッグ用)。
    pub fn get_state_json(&self) -> Result<String, JsValue> {
        let controller = self.lock()?;
        state_getter::board_state_json(controller.board()).map_err(js_error)
    }

    /// 今のフレームの中身を JSON で返す (デバッグ用)。
    pub fn get_frame_json(&self) -> Result<String, JsValue> {
        let frame = self.lock()?.on_draw();
        serde_json::to_string(&frame).map_err(js_error)
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas.height()
    }
}

impl GameApp {
    fn lock(&self) -> Result<MutexGuard<'_, InteractionController>, JsValue> {
        self.controller
            .lock()
            .map_err(|e| js_error(format!("Failed to lock controller: {}", e)))
    }
}

/// Rust 側のエラーを JS の `Error` にする。
fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from(js_sys::Error::new(&e.to_string()))
}

impl Drop for GameApp {
    fn drop(&mut self) {
        info!("GameApp: 破棄中。イベントリスナーを外します...");
        if let Err(e) = browser_event_manager::detach_listeners(std::mem::take(&mut self.listeners)) {
            error!("GameApp: リスナーを外せなかった: {:?}", e);
        }
    }
}

// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod logging;
pub mod logic;
pub mod systems;

pub use app::game_app::GameApp;
pub use app::{InteractionController, InteractionState, PressOutcome, ReleaseOutcome};
pub use board::{Board, Pile};
pub use config::{GameConfig, Variant};
pub use error::GameError;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if logging::init().is_ok() {
        log::info!("Panic hook and logger set!");
    }
}

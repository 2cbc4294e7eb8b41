// src/app/mod.rs
//! ゲームの操作 (入力 → 盤面) と、ブラウザとのつなぎ込みを役割ごとに分けて置くモジュールだよ！

pub mod browser_event_manager;
pub mod controller;
pub mod drag_apply_handler;
pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod init_handler;
pub mod layout_calculator;
pub mod renderer;
pub mod state_getter;
pub mod stock_handler;


pub use controller::{InteractionController, InteractionState, PressOutcome};
pub use drag_handler::{HeldSelection, ReleaseOutcome};

// src/app/controller.rs
//! ポインタ入力を盤面の操作に変換するステートマシン。
//!
//! 状態は `Idle` と `Holding` の 2 つだけ。押すと持ち上げて `Holding`、
//! 離すと置くか戻すかして必ず `Idle` に戻る。盤面 (`Board`) はこれが独占して持つ。

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::drag_handler::{self, HeldSelection, ReleaseOutcome};
use super::event_handler::{self, ClickTarget};
use super::renderer::{self, Frame};
use super::stock_handler;
use crate::board::Board;
use crate::config::GameConfig;
use crate::systems::DealInitialCardsSystem;

/// コントローラーの状態。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Holding(HeldSelection),
}

/// 押した結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// カードの無い所を押した (か、もう何か持っている)。
    Nothing,
    /// 山札を押して `n` 枚配った。
    DealtFromStock(usize),
    /// `n` 枚持ち上げた。
    Picked(usize),
}

pub struct InteractionController {
    board: Board,
    config: GameConfig,
    rng: StdRng,
    state: InteractionState,
}

impl InteractionController {
    /// 空の盤面でコントローラーを作る。カードを配るのは `setup` で。
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            board: Board::new(config.variant),
            config,
            rng,
            state: InteractionState::Idle,
        }
    }

    /// 手で組んだ盤面から作る (テスト用)。
    #[cfg(test)]
    pub(crate) fn from_board(config: GameConfig, board: Board) -> Self {
        let mut controller = Self::new(config);
        controller.board = board;
        controller
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, InteractionState::Holding(_))
    }

    /// デッキを作り直してシャッフルし、配り直す。持っているカードは捨てる。
    pub fn setup(&mut self) {
        self.state = InteractionState::Idle;
        DealInitialCardsSystem::new(self.config.variant).execute(&mut self.board, &mut self.rng);
        self.settle();
    }

    pub fn restart(&mut self) {
        info!("🔄 リスタート！");
        self.setup();
    }

    /// 今の画面 (マットとカード) を描画順に並べたもの。
    pub fn on_draw(&self) -> Frame {
        renderer::build_frame(&self.board)
    }

    pub fn on_pointer_press(&mut self, x: f32, y: f32) -> PressOutcome {
        if self.is_holding() {
            debug!("Press at ({}, {}) while holding. Ignored.", x, y);
            return PressOutcome::Nothing;
        }
        match event_handler::find_clicked_element(&self.board, x, y) {
            None => PressOutcome::Nothing,
            Some(ClickTarget::Stock) => {
                let dealt = stock_handler::deal_from_stock(&mut self.board);
                self.settle();
                PressOutcome::DealtFromStock(dealt)
            }
            Some(ClickTarget::Card(entity)) => {
                match drag_handler::handle_drag_start(&mut self.board, entity) {
                    Some(held) => {
                        let count = held.len();
                        self.state = InteractionState::Holding(held);
                        PressOutcome::Picked(count)
                    }
                    None => PressOutcome::Nothing,
                }
            }
        }
    }

    /// 持っているカードを (dx, dy) だけ動かす。何も持っていなければ何もしない。
    pub fn on_pointer_move(&mut self, dx: f32, dy: f32) {
        if let InteractionState::Holding(held) = &self.state {
            drag_handler::update_dragged_positions(&mut self.board, held, dx, dy);
        }
    }

    /// 持っているカードを置く (か元に戻す)。どっちにしても `Idle` に戻る。
    ///
    /// 置き先は持っているカードの位置で決まるので、(x, y) はログにしか使わない。
    pub fn on_pointer_release(&mut self, x: f32, y: f32) -> ReleaseOutcome {
        let InteractionState::Holding(held) = std::mem::take(&mut self.state) else {
            return ReleaseOutcome::Ignored;
        };
        debug!("Release at ({}, {}) with {} card(s)", x, y, held.len());
        let outcome = drag_handler::handle_drag_end(&mut self.board, &held);
        if let ReleaseOutcome::Committed { .. } = outcome {
            self.settle();
        }
        outcome
    }

    /// キー入力。リスタートキーなら配り直して `true`。
    pub fn on_key(&mut self, code: &str) -> bool {
        if self.config.is_restart_key(code) {
            self.restart();
            true
        } else {
            debug!("Key {:?} ignored", code);
            false
        }
    }

    /// 盤面が変わった後の後始末。勝利判定と、山の帳簿チェック。
    fn settle(&mut self) {
        let status = self.board.refresh_status();
        debug!("Status: {:?}", status);
        debug_assert_eq!(self.board.check_partition().map_err(|e| e.to_string()), Ok(()));
    }
}

// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の状態だよ！🏁
///
/// 1 人用なので勝者 ID とかは要らない。全部のカードが組札に乗ったら `Won`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// 勝利！🏆
    Won,
}

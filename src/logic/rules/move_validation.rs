//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::board::Board;
use crate::components::stack::{PileId, PileKind};
use crate::ecs::entity::Entity;
use crate::logic::rules::{foundation, tableau};

/// 持ち上げた束 `selection` (下から上の順) を山 `target` に置けるか。
///
/// 山の種類ごとにルールを切り替える。山札はドロップ先にならない。
pub fn is_move_valid(board: &Board, selection: &[Entity], target: PileId) -> bool {
    let Some(&bottom) = selection.first() else {
        return false;
    };
    let Some(pile) = board.pile(target) else {
        debug!("[Rules Validation] Unknown target {}", target);
        return false;
    };

    match pile.kind() {
        PileKind::Tableau => tableau::can_move_to_tableau(board.world(), bottom, pile.top_card()),
        PileKind::Foundation => foundation::can_move_to_foundation(selection.len()),
        PileKind::Stock => {
            debug!("[Rules Validation] Dropping onto the stock is not allowed");
            false
        }
    }
}

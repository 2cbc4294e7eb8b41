// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).

use log::{debug, info, warn};

use super::drag_apply_handler;
use crate::app::event_handler;
use crate::app::layout_calculator::card_bounds;
use crate::board::Board;
use crate::components::{PileId, Position};
use crate::ecs::entity::Entity;

/// 持ち上げ中のカードの束。押してから離すまでの間だけ存在する。
#[derive(Debug, Clone, PartialEq)]
pub struct HeldSelection {
    /// 押したカードと、その上に乗っていたカード (山の中の順番のまま)。
    pub cards: Vec<Entity>,
    /// 持ち上げた元の山。
    pub origin: PileId,
    /// 持ち上げた時の位置。`cards` と同じ並び。
    pub original_positions: Vec<Position>,
}

impl HeldSelection {
    /// 束の先頭 (一番下) のカード。ドロップ先はこのカードで決める。
    pub fn primary(&self) -> Option<Entity> {
        self.cards.first().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// 離した結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// 何も持っていなかった。
    Ignored,
    /// `target` に `count` 枚移した。
    Committed { target: PileId, count: usize },
    /// 置けなかったので元の位置に戻した。
    Reverted,
}

/// ドラッグ開始。`entity` とその上のカードを持ち上げて、描画順の一番手前に持ってくる。
pub fn handle_drag_start(board: &mut Board, entity: Entity) -> Option<HeldSelection> {
    let origin = board.pile_of(entity)?;
    let pile = board.pile(origin)?;
    let depth = pile.index_of(entity)?;
    let cards = pile.cards()[depth..].to_vec();
    let original_positions = cards
        .iter()
        .map(|&card| board.position(card))
        .collect::<Option<Vec<Position>>>()?;

    for &card in &cards {
        board.pull_to_top(card);
    }
    info!(
        "Picked up {} card(s) from {} starting at depth {}",
        cards.len(),
        origin,
        depth
    );
    Some(HeldSelection { cards, origin, original_positions })
}

/// ドラッグ中。持っているカード全部を (dx, dy) だけ動かす。
pub fn update_dragged_positions(board: &mut Board, held: &HeldSelection, dx: f32, dy: f32) {
    for &card in &held.cards {
        match board.position(card) {
            Some(pos) => board.set_position(card, pos.offset(dx, dy)),
            None => warn!("Dragged card {:?} has no Position", card),
        }
    }
}

/// ドラッグ終了。置ける山があれば移し、無ければ全部元の位置に戻す。
pub fn handle_drag_end(board: &mut Board, held: &HeldSelection) -> ReleaseOutcome {
    let Some(primary) = held.primary() else {
        return ReleaseOutcome::Ignored;
    };
    let Some(primary_pos) = board.position(primary) else {
        warn!("Held card {:?} has no Position. Reverting.", primary);
        reset_card_positions(board, held);
        return ReleaseOutcome::Reverted;
    };

    let target = event_handler::find_drop_target(board, primary_pos, &held.cards);
    let accepted = target.filter(|target| {
        let overlaps = card_bounds(primary_pos).overlaps(&target.bounds);
        debug!("  Candidate {} overlaps: {} (origin {})", target.pile, overlaps, held.origin);
        overlaps && target.pile != held.origin && board.can_accept(target.pile, &held.cards)
    });

    match accepted {
        Some(target) => {
            let count = drag_apply_handler::apply_move(board, held, target.pile);
            info!("Moved {} card(s) from {} to {}", count, held.origin, target.pile);
            ReleaseOutcome::Committed { target: target.pile, count }
        }
        None => {
            info!("Drop rejected. Returning {} card(s) to {}", held.len(), held.origin);
            reset_card_positions(board, held);
            ReleaseOutcome::Reverted
        }
    }
}

/// 持っているカードを持ち上げた時の位置に戻す。
pub fn reset_card_positions(board: &mut Board, held: &HeldSelection) {
    for (&card, &original) in held.cards.iter().zip(&held.original_positions) {
        board.set_position(card, original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pile;
    use crate::components::{Card, PileKind, Rank, Suit};
    use crate::config::Variant;

    fn tableau(board: &Board, i: usize) -> PileId {
        board.piles_of_kind(PileKind::Tableau).map(Pile::id).nth(i).expect("場札")
    }

    #[test]
    fn drag_start_lifts_card_and_everything_above() {
        let mut board = Board::new(Variant::Klondike);
        let pile = tableau(&board, 0);
        let cards: Vec<Entity> = [Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven]
            .into_iter()
            .filter_map(|rank| board.spawn_card(Card::new(Suit::Club, rank), pile))
            .collect();

        let held = handle_drag_start(&mut board, cards[1]).expect("持ち上げられるはず");
        assert_eq!(held.cards, cards[1..].to_vec());
        assert_eq!(held.origin, pile);
        assert_eq!(held.original_positions.len(), 3);
        assert_eq!(held.primary(), Some(cards[1]));
        assert_eq!(board.draw_order()[1..].to_vec(), cards[1..].to_vec(), "持ったカードが手前に来る");
        assert_eq!(board.pile(pile).map(Pile::len), Some(4), "離すまで山からは抜かない");
    }

    #[test]
    fn update_moves_all_held_cards() {
        let mut board = Board::new(Variant::Klondike);
        let pile = tableau(&board, 0);
        let a = board.spawn_card(Card::new(Suit::Club, Rank::Ten), pile).expect("spawn");
        let b = board.spawn_card(Card::new(Suit::Club, Rank::Nine), pile).expect("spawn");
        let held = handle_drag_start(&mut board, a).expect("held");
        let before: Vec<Position> = held.original_positions.clone();

        update_dragged_positions(&mut board, &held, 10.0, -5.0);
        assert_eq!(board.position(a), Some(before[0].offset(10.0, -5.0)));
        assert_eq!(board.position(b), Some(before[1].offset(10.0, -5.0)));

        reset_card_positions(&mut board, &held);
        assert_eq!(board.position(a), Some(before[0]));
        assert_eq!(board.position(b), Some(before[1]));
    }

    #[test]
    fn drag_end_without_overlap_reverts() {
        let mut board = Board::new(Variant::Klondike);
        let pile = tableau(&board, 0);
        let a = board.spawn_card(Card::new(Suit::Club, Rank::Ten), pile).expect("spawn");
        let held = handle_drag_start(&mut board, a).expect("held");
        let start = held.original_positions[0];

        // 画面の外まで持っていく
        update_dragged_positions(&mut board, &held, 5000.0, 5000.0);
        assert_eq!(handle_drag_end(&mut board, &held), ReleaseOutcome::Reverted);
        assert_eq!(board.position(a), Some(start));
        assert_eq!(board.pile_of(a), Some(pile));
    }
}

// src/app/drag_apply_handler.rs
//! Handles applying the consequences of a successful drag-and-drop move.

use log::debug;

use super::drag_handler::HeldSelection;
use crate::app::layout_calculator;
use crate::board::Board;
use crate::components::PileId;

/// 持っているカードを `target` の上に順番に積んで、元の山の一番上を表にする。
/// 移した枚数を返す。
///
/// 位置は積む直前の一番上のカードを基準に決めるので、
/// 空でない場札なら一番上の下に 1 段ずつ、空ならマットから 1 段ずつ、
/// 組札ならマットの上にぴったり重なる。
pub fn apply_move(board: &mut Board, held: &HeldSelection, target: PileId) -> usize {
    let mut moved = 0;
    for &card in &held.cards {
        let Some(new_position) = layout_calculator::next_card_position(board, target) else {
            break;
        };
        if !board.move_card_to_pile(card, target) {
            break;
        }
        board.set_position(card, new_position);
        debug!("  {:?} -> {} at ({}, {})", card, target, new_position.x, new_position.y);
        moved += 1;
    }
    reveal_origin_top(board, held.origin);
    moved
}

/// 元の山に残った一番上のカードを表にする。
fn reveal_origin_top(board: &mut Board, origin: PileId) {
    board.flip_top_face_up(origin);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::drag_handler::handle_drag_start;
    use crate::board::Pile;
    use crate::components::{Card, PileKind, Position, Rank, Suit};
    use crate::config::layout::CARD_VERTICAL_OFFSET;
    use crate::config::Variant;
    use crate::ecs::entity::Entity;

    fn ids(board: &Board, kind: PileKind) -> Vec<PileId> {
        board.piles_of_kind(kind).map(Pile::id).collect()
    }

    fn close(a: Position, b: Position) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn stack_lands_below_target_top_and_origin_is_revealed() {
        let mut board = Board::new(Variant::Klondike);
        let tableau = ids(&board, PileKind::Tableau);
        let hidden = board.spawn_card(Card::new(Suit::Heart, Rank::Two), tableau[0]).expect("spawn");
        let held_cards: Vec<Entity> = [Rank::Nine, Rank::Eight]
            .into_iter()
            .filter_map(|rank| board.spawn_card(Card::new(Suit::Club, rank), tableau[0]))
            .collect();
        let ten = board.spawn_card(Card::new(Suit::Spade, Rank::Ten), tableau[1]).expect("spawn");
        let ten_pos = board.position(ten).expect("pos");

        let held = handle_drag_start(&mut board, held_cards[0]).expect("held");
        assert_eq!(apply_move(&mut board, &held, tableau[1]), 2);

        let target_cards = board.pile(tableau[1]).map(|p| p.cards().to_vec());
        assert_eq!(target_cards, Some(vec![ten, held_cards[0], held_cards[1]]));
        for (i, &card) in held_cards.iter().enumerate() {
            let expected = ten_pos.offset(0.0, CARD_VERTICAL_OFFSET * (i + 1) as f32);
            assert!(close(board.position(card).expect("pos"), expected));
        }
        assert!(board.card(hidden).map_or(false, |c| c.is_face_up), "元の山の一番上が表になる");
        assert!(board.check_partition().is_ok());
    }

    #[test]
    fn foundation_card_sits_on_anchor() {
        let mut board = Board::new(Variant::Klondike);
        let tableau = ids(&board, PileKind::Tableau)[0];
        let foundation = ids(&board, PileKind::Foundation)[0];
        let ace = board.spawn_card(Card::new(Suit::Spade, Rank::Ace), tableau).expect("spawn");

        let held = handle_drag_start(&mut board, ace).expect("held");
        assert_eq!(apply_move(&mut board, &held, foundation), 1);
        assert_eq!(board.position(ace), board.pile(foundation).map(Pile::anchor));
        assert!(board.pile(tableau).map_or(false, Pile::is_empty));
    }
}

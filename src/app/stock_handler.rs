// src/app/stock_handler.rs
//! Handles clicks on the Stock pile: dealing face-up cards onto the tableau.

use log::{debug, info};

use crate::app::layout_calculator;
use crate::board::{Board, Pile};
use crate::components::{PileId, PileKind};
use crate::config::StockRule;
use crate::logic::rules::{can_deal_from_stock, receives_row_deal};

/// Deals from the Stock according to the variant's stock rule.
/// Returns the number of cards dealt (0 when the Stock is empty).
pub fn deal_from_stock(board: &mut Board) -> usize {
    let stock_is_empty = board.stock().map_or(true, Pile::is_empty);
    if !can_deal_from_stock(stock_is_empty) {
        info!("Stock is empty. Nothing to deal.");
        return 0;
    }
    let dealt = match board.variant().stock_rule() {
        StockRule::DealOne => usize::from(deal_one(board)),
        StockRule::DealRow => deal_row(board),
    };
    info!("Dealt {} card(s) from Stock.", dealt);
    dealt
}

/// Puts the Stock's top card face up onto the tableau pile with the fewest
/// cards (leftmost on ties).
fn deal_one(board: &mut Board) -> bool {
    let target = board
        .piles_of_kind(PileKind::Tableau)
        .min_by_key(|pile| pile.len())
        .map(Pile::id);
    match target {
        Some(target) => deal_top_card_to(board, target),
        None => false,
    }
}

/// Deals one face-up card onto every non-empty tableau pile, left to right,
/// until the Stock runs out.
fn deal_row(board: &mut Board) -> usize {
    let targets: Vec<PileId> = board
        .piles_of_kind(PileKind::Tableau)
        .filter(|pile| receives_row_deal(pile.is_empty()))
        .map(Pile::id)
        .collect();

    let mut dealt = 0;
    for target in targets {
        let stock_is_empty = board.stock().map_or(true, Pile::is_empty);
        if !can_deal_from_stock(stock_is_empty) {
            debug!("  Stock ran out after {} card(s).", dealt);
            break;
        }
        if deal_top_card_to(board, target) {
            dealt += 1;
        }
    }
    dealt
}

/// Moves the Stock's top card onto `target`, face up and drawn above everything.
fn deal_top_card_to(board: &mut Board, target: PileId) -> bool {
    let Some(stock) = board.stock().map(Pile::id) else {
        return false;
    };
    let Some(card) = board.pile(stock).and_then(Pile::top_card) else {
        return false;
    };
    let Some(new_position) = layout_calculator::next_card_position(board, target) else {
        return false;
    };

    if !board.move_card_to_pile(card, target) {
        return false;
    }
    board.set_position(card, new_position);
    board.flip_top_face_up(target);
    board.pull_to_top(card);
    debug!("  Dealt {:?} to {}", card, target);
    true
}

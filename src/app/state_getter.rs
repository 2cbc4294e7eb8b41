//! Gets the current board state and converts it to JSON.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::components::{GameStatus, PileId, PileKind, Position, Rank, Suit};
use crate::config::Variant;
use crate::ecs::entity::Entity;
use crate::error::GameError;

/// カード 1 枚分のスナップショット。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub entity: Entity,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub pile: PileId,
    pub position_in_stack: usize,
    pub position: Position,
}

/// 山 1 つ分のスナップショット。カードは下から上の順。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileData {
    pub id: PileId,
    pub kind: PileKind,
    pub anchor: Position,
    pub cards: Vec<Entity>,
}

/// 盤面全体のスナップショット。デバッグ用に JS 側へ渡す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateData {
    pub variant: Variant,
    pub status: GameStatus,
    pub piles: Vec<PileData>,
    pub cards: Vec<CardData>,
}

/// 盤面からスナップショットを作る。カードは山の順、山の中では下から上の順。
pub fn collect_state(board: &Board) -> GameStateData {
    let piles: Vec<PileData> = board
        .piles()
        .iter()
        .map(|pile| PileData {
            id: pile.id(),
            kind: pile.kind(),
            anchor: pile.anchor(),
            cards: pile.cards().to_vec(),
        })
        .collect();

    let mut cards = Vec::with_capacity(board.card_count());
    for pile in board.piles() {
        for (position_in_stack, &entity) in pile.cards().iter().enumerate() {
            match (board.card(entity), board.position(entity)) {
                (Some(card), Some(position)) => cards.push(CardData {
                    entity,
                    suit: card.suit,
                    rank: card.rank,
                    is_face_up: card.is_face_up,
                    pile: pile.id(),
                    position_in_stack,
                    position,
                }),
                _ => warn!("Entity {:?} is missing Card or Position. Skipping.", entity),
            }
        }
    }

    GameStateData {
        variant: board.variant(),
        status: board.status(),
        piles,
        cards,
    }
}

/// 盤面の状態を JSON 文字列にする。
pub fn board_state_json(board: &Board) -> Result<String, GameError> {
    let state = collect_state(board);
    info!("Collected data for {} cards.", state.cards.len());
    Ok(serde_json::to_string(&state)?)
}

// src/app/renderer.rs
//! GameApp の描画関連ロジック。
//!
//! 盤面から「何をどこに描くか」(`Frame`) を作る部分と、それを Canvas に描く部分に分かれてる。
//! `Frame` は純粋なデータなので、ブラウザが無くてもテストできるよ。

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::board::Board;
use crate::components::{PileId, PileKind};
use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH, MAT_HEIGHT, MAT_WIDTH};
use crate::ecs::entity::Entity;

const TABLE_COLOR: &str = "#2e7d32";
const MAT_COLOR: &str = "#1b5e20";
const CARD_FACE_COLOR: &str = "#ffffff";
const CARD_BACK_COLOR: &str = "#1565c0";
const CARD_EDGE_COLOR: &str = "#333333";
const RED_SUIT_COLOR: &str = "#c62828";
const BLACK_SUIT_COLOR: &str = "#212121";

/// 山のマット 1 枚分。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatSprite {
    pub pile: PileId,
    pub kind: PileKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// カード 1 枚分。裏向きなら `label` は `None`。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSprite {
    pub entity: Entity,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub face_up: bool,
    pub label: Option<String>,
    pub is_red: bool,
}

/// 1 フレーム分の描画内容。マットは山の順、カードは描画順 (奥 → 手前)。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub mats: Vec<MatSprite>,
    pub cards: Vec<CardSprite>,
}

/// 盤面から描画内容を組み立てる。
pub fn build_frame(board: &Board) -> Frame {
    let (width, height) = board.variant().window_size();
    let mats = board
        .piles()
        .iter()
        .map(|pile| MatSprite {
            pile: pile.id(),
            kind: pile.kind(),
            x: pile.anchor().x,
            y: pile.anchor().y,
            width: MAT_WIDTH,
            height: MAT_HEIGHT,
        })
        .collect();
    let cards = board
        .draw_order()
        .into_iter()
        .filter_map(|entity| {
            let card = board.card(entity)?;
            let pos = board.position(entity)?;
            Some(CardSprite {
                entity,
                x: pos.x,
                y: pos.y,
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
                face_up: card.is_face_up,
                label: card.is_face_up.then(|| card.label()),
                is_red: card.suit.is_red(),
            })
        })
        .collect();
    Frame { width, height, mats, cards }
}

/// `Frame` を Canvas に描く。座標はどれも中心なので、左上に直して描くよ。
pub fn draw_frame(context: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), JsValue> {
    let (width, height) = (frame.width as f64, frame.height as f64);
    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(TABLE_COLOR);
    context.fill_rect(0.0, 0.0, width, height);

    context.set_line_width(2.0);
    for mat in &frame.mats {
        let (left, top) = top_left(mat.x, mat.y, mat.width, mat.height);
        context.set_fill_style_str(MAT_COLOR);
        context.fill_rect(left, top, mat.width as f64, mat.height as f64);
    }

    context.set_font("20px sans-serif");
    context.set_text_align("left");
    context.set_text_baseline("top");
    for card in &frame.cards {
        let (left, top) = top_left(card.x, card.y, card.width, card.height);
        let (w, h) = (card.width as f64, card.height as f64);
        let face = if card.face_up { CARD_FACE_COLOR } else { CARD_BACK_COLOR };
        context.set_fill_style_str(face);
        context.fill_rect(left, top, w, h);
        context.set_stroke_style_str(CARD_EDGE_COLOR);
        context.stroke_rect(left, top, w, h);

        if let Some(label) = &card.label {
            let ink = if card.is_red { RED_SUIT_COLOR } else { BLACK_SUIT_COLOR };
            context.set_fill_style_str(ink);
            context.fill_text(label, left + 6.0, top + 6.0)?;
        }
    }
    Ok(())
}

fn top_left(x: f32, y: f32, width: f32, height: f32) -> (f64, f64) {
    ((x - width / 2.0) as f64, (y - height / 2.0) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pile;
    use crate::components::{Card, Rank, Suit};
    use crate::config::Variant;

    #[test]
    fn frame_lists_mats_in_pile_order_and_cards_in_draw_order() {
        let mut board = Board::new(Variant::Klondike);
        let tableau = board.piles_of_kind(PileKind::Tableau).map(Pile::id).next().expect("場札");
        let a = board.spawn_card(Card::new(Suit::Heart, Rank::Queen), tableau).expect("spawn");
        let b = board.spawn_card(Card::new(Suit::Spade, Rank::Jack), tableau).expect("spawn");
        board.flip_top_face_up(tableau);
        board.pull_to_top(a);

        let frame = build_frame(&board);
        assert_eq!((frame.width, frame.height), (1024.0, 768.0));
        let mat_ids: Vec<PileId> = frame.mats.iter().map(|m| m.pile).collect();
        assert_eq!(mat_ids, board.piles().iter().map(Pile::id).collect::<Vec<_>>());

        let order: Vec<Entity> = frame.cards.iter().map(|c| c.entity).collect();
        assert_eq!(order, vec![b, a]);
        assert_eq!(frame.cards[0].label.as_deref(), Some("J♠"));
        assert!(!frame.cards[0].is_red);
        assert_eq!(frame.cards[1].label, None, "裏向きのカードは何が書いてあるか見せない");
        assert!(frame.cards[1].is_red);
    }

    #[test]
    fn frame_serializes_to_json() {
        let board = Board::new(Variant::TenPile);
        let json = serde_json::to_string(&build_frame(&board)).expect("シリアライズできるはず");
        assert!(json.contains("\"mats\""));
        assert!(json.contains("\"Stock\""));
    }
}

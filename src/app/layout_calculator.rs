// src/app/layout_calculator.rs
//! 山のマット位置と、山の中のカードの描画位置を計算するよ。

use crate::board::{Board, Pile};
use crate::components::{PileId, PileKind, Position};
use crate::config::layout::{
    bottom_y, column_x, CARD_HEIGHT, CARD_VERTICAL_OFFSET, CARD_WIDTH, MAT_HEIGHT, MAT_WIDTH,
    MIDDLE_Y, TOP_Y,
};
use crate::config::Variant;
use crate::logic::geometry::Bounds;

/// バリアントの山の並び。返す順番がそのまま `PileId` になる。
///
/// - Klondike: 山札 (左上)、組札 4 つ (上段の右側)、場札 7 列 (中段)
/// - TenPile: 山札 (左下)、場札 10 列 (上段)
pub fn pile_layout(variant: Variant) -> Vec<(PileKind, Position)> {
    let mut layout = Vec::new();
    match variant {
        Variant::Klondike => {
            layout.push((PileKind::Stock, Position::new(column_x(0), TOP_Y)));
            for i in 0..variant.foundation_count() {
                layout.push((PileKind::Foundation, Position::new(column_x(3 + i), TOP_Y)));
            }
            for i in 0..variant.tableau_count() {
                layout.push((PileKind::Tableau, Position::new(column_x(i), MIDDLE_Y)));
            }
        }
        Variant::TenPile => {
            let (_, height) = variant.window_size();
            layout.push((PileKind::Stock, Position::new(column_x(0), bottom_y(height))));
            for i in 0..variant.tableau_count() {
                layout.push((PileKind::Tableau, Position::new(column_x(i), TOP_Y)));
            }
        }
    }
    layout
}

/// 次に `pile` へ積むカードが置かれる位置。
///
/// 空ならマット位置。そうでなければ今の一番上のカードの位置が基準になる
/// (ドラッグで配置がずれていても、見えているカードにそろえる)。
pub fn next_card_position(board: &Board, pile: PileId) -> Option<Position> {
    let pile = board.pile(pile)?;
    let top_position = pile.top_card().and_then(|top| board.position(top));
    Some(match (top_position, pile.kind()) {
        (None, _) => pile.anchor(),
        (Some(top), PileKind::Tableau) => top.offset(0.0, CARD_VERTICAL_OFFSET),
        (Some(_), PileKind::Stock | PileKind::Foundation) => pile.anchor(),
    })
}

/// カード 1 枚分の当たり判定。
pub fn card_bounds(center: Position) -> Bounds {
    Bounds::centered(center, CARD_WIDTH, CARD_HEIGHT)
}

/// 山のマットの当たり判定。
pub fn mat_bounds(pile: &Pile) -> Bounds {
    Bounds::centered(pile.anchor(), MAT_WIDTH, MAT_HEIGHT)
}

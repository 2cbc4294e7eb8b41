// src/app/event_handler.rs
//! 当たり判定まわり。どのカードが押されたか、どの山に落とされたかを探すよ。

use log::debug;

use crate::app::layout_calculator::{card_bounds, mat_bounds};
use crate::board::Board;
use crate::components::{Card, PileId, PileKind, Position};
use crate::ecs::entity::Entity;
use crate::logic::geometry::Bounds;

/// 押された要素の種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// 山札以外の山にいるカード。持ち上げ対象。
    Card(Entity),
    /// 山札のカード。押すと配る。
    Stock,
}

/// ドロップ先の候補がマットとカードのどっちで見つかったか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetVia {
    Mat,
    TopCard(Entity),
}

/// ドロップ先の候補。重なり判定はこの `bounds` で行う。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTarget {
    pub pile: PileId,
    pub bounds: Bounds,
    pub via: TargetVia,
}

/// (x, y) にある一番手前 (ZIndex が最大) のカードを探す。
pub fn find_topmost_card(board: &Board, x: f32, y: f32) -> Option<Entity> {
    board
        .world()
        .get_all_entities_with_component::<Card>()
        .into_iter()
        .filter(|&entity| {
            board
                .position(entity)
                .map_or(false, |pos| card_bounds(pos).contains(x, y))
        })
        .max_by_key(|&entity| board.z_index(entity))
}

/// (x, y) で押された要素を特定する。何も無ければ `None`。
pub fn find_clicked_element(board: &Board, x: f32, y: f32) -> Option<ClickTarget> {
    let Some(entity) = find_topmost_card(board, x, y) else {
        debug!("No card at ({}, {})", x, y);
        return None;
    };
    let kind = board
        .pile_of(entity)
        .and_then(|pile| board.pile(pile))
        .map(|pile| pile.kind());
    debug!("Hit {:?} in {:?} at ({}, {})", entity, kind, x, y);
    match kind {
        Some(PileKind::Stock) => Some(ClickTarget::Stock),
        Some(_) => Some(ClickTarget::Card(entity)),
        None => None,
    }
}

/// 持っているカードを落とす先の候補を探す。
///
/// `from` (持っているカードの先頭の中心) から一番近いマットと、一番近い
/// 見えているカード (各山の一番上) を比べて、カードの方が真に近ければカード、
/// そうでなければマットを選ぶ。
///
/// 元の山のマットも候補に入る (選ばれたら呼び出し側で元に戻す)。
/// 持っているカード自身はカードの候補にしない。
pub fn find_drop_target(board: &Board, from: Position, held: &[Entity]) -> Option<DropTarget> {
    let nearest_mat = board
        .piles()
        .iter()
        .map(|pile| (pile, from.distance_to(pile.anchor())))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(pile, distance)| {
            let target = DropTarget {
                pile: pile.id(),
                bounds: mat_bounds(pile),
                via: TargetVia::Mat,
            };
            (target, distance)
        });

    let nearest_top_card = board
        .piles()
        .iter()
        .filter_map(|pile| {
            let top = pile.top_card().filter(|top| !held.contains(top))?;
            let pos = board.position(top)?;
            Some((pile.id(), top, pos, from.distance_to(pos)))
        })
        .min_by(|a, b| a.3.total_cmp(&b.3))
        .map(|(pile, top, pos, distance)| {
            let target = DropTarget {
                pile,
                bounds: card_bounds(pos),
                via: TargetVia::TopCard(top),
            };
            (target, distance)
        });

    let chosen = match (nearest_mat, nearest_top_card) {
        (Some((mat, mat_distance)), Some((card, card_distance))) => {
            if card_distance < mat_distance {
                card
            } else {
                mat
            }
        }
        (Some((mat, _)), None) => mat,
        (None, Some((card, _))) => card,
        (None, None) => return None,
    };
    debug!("Drop candidate: {:?}", chosen);
    Some(chosen)
}

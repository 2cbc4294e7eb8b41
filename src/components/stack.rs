// src/components/stack.rs

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 山 (Pile) の種類。置けるかどうかのルールはこれで分岐するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// 山札。裏向きで積まれていて、クリックすると配られる。ドロップ先にはならない。
    Stock,
    /// 場札。ランクが 1 ずつ下がるように積んでいく。
    Tableau,
    /// 組札。1 枚ずつしか置けない。
    Foundation,
}

/// 盤面上の山の番号。`Board` の山リストのインデックスそのもの。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("pile#{_0}")]
pub struct PileId(pub usize);

/// カードから「自分がいる山」への逆参照コンポーネント。
///
/// `Board` が山の `Vec<Entity>` を書き換えるのと同じ呼び出しの中で更新する。
/// これのおかげで「このカードはどの山？」が全部の山を探さずに分かる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackInfo {
    /// カードが属している山。
    pub pile: PileId,
    /// その山の中で下から何番目か (0 が一番下)。
    pub position_in_stack: usize,
}

impl StackInfo {
    pub fn new(pile: PileId, position_in_stack: usize) -> Self {
        Self { pile, position_in_stack }
    }
}

impl Component for StackInfo {}

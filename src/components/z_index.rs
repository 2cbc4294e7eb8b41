// src/components/z_index.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 描画順 (重なり順) のキー。大きいほど後に描かれて、手前に見える。
///
/// 山のどこにいるかとは関係なく、`Board::pull_to_top` で一番上に持ってくると
/// その時点での最大値 + 1 が入る。当たり判定も「一番大きい ZIndex のカード」を選ぶよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZIndex(pub u32);

impl Component for ZIndex {}

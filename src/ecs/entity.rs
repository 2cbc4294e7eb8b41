// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

/// Entity（エンティティ）は、ゲームに登場する「モノ」を表すただの ID だよ！
///
/// このクレートでは、カード 1 枚 1 枚がエンティティになる。
/// 2 デッキ使うバリアントだと同じスート・ランクのカードが 2 枚あるけど、
/// エンティティ ID は必ず別物になるから、「どのカードか」を取り違えることはないよ。
///
/// 中身の数値そのものに意味はなくて、`World` に付けたコンポーネント
/// (`Card`, `Position`, `StackInfo`, `ZIndex`) と組み合わせて初めて意味を持つんだ。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);

impl Entity {
    /// 中身の ID を取り出す。wasm 側 (JS) に渡すときとかに使うよ。
    pub fn id(self) -> usize {
        self.0
    }
}

// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 2D の位置。カードや山の「中心」の座標だよ。📍
///
/// 座標系はウィンドウ (canvas) と同じで、左上が原点、y は下に向かって増える。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// (dx, dy) だけずらした位置。
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// 2 点間のユークリッド距離。
    pub fn distance_to(self, other: Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Component for Position {}

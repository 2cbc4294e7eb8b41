// src/logic/geometry.rs
//! 当たり判定用の矩形。カードもマットも「中心 + 幅・高さ」で表すよ。

use crate::components::position::Position;

/// 軸に平行な矩形。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// 中心と大きさから矩形を作る。
    pub fn centered(center: Position, width: f32, height: f32) -> Self {
        Self {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0,
            right: center.x + width / 2.0,
            bottom: center.y + height / 2.0,
        }
    }

    /// 点が矩形の中 (境界を含む) にあるか。
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// 2 つの矩形が重なっているか。辺が接しているだけのときは重なりとみなさない。
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_at(x: f32, y: f32) -> Bounds {
        Bounds::centered(Position::new(x, y), 10.0, 10.0)
    }

    #[test]
    fn centered_bounds_edges() {
        let b = Bounds::centered(Position::new(100.0, 50.0), 20.0, 40.0);
        assert_eq!((b.left, b.top, b.right, b.bottom), (90.0, 30.0, 110.0, 70.0));
    }

    #[test]
    fn contains_includes_edges() {
        let b = square_at(0.0, 0.0);
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(5.0, -5.0), "角っこもヒット");
        assert!(!b.contains(5.1, 0.0));
    }

    #[test]
    fn overlap_cases() {
        let a = square_at(0.0, 0.0);
        assert!(a.overlaps(&square_at(9.0, 9.0)));
        assert!(square_at(9.0, 9.0).overlaps(&a), "対称なはず");
        assert!(!a.overlaps(&square_at(10.0, 0.0)), "辺が接してるだけなら重なってない");
        assert!(!a.overlaps(&square_at(0.0, 30.0)));
    }
}

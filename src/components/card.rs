// src/components/card.rs

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// カードのスート（マーク）だよ！ ♣️♦️❤️♠️
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[display("♣")]
    Club,
    #[display("♦")]
    Diamond,
    #[display("♥")]
    Heart,
    #[display("♠")]
    Spade,
}

impl Suit {
    /// 赤いスートか。描画の色分けにだけ使う (置けるかどうかの判定では色は見ないよ)。
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamond | Suit::Heart)
    }
}

/// カードのランク。A は 1、K は 13。
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[display("A")]
    Ace = 1,
    #[display("2")]
    Two,
    #[display("3")]
    Three,
    #[display("4")]
    Four,
    #[display("5")]
    Five,
    #[display("6")]
    Six,
    #[display("7")]
    Seven,
    #[display("8")]
    Eight,
    #[display("9")]
    Nine,
    #[display("10")]
    Ten,
    #[display("J")]
    Jack,
    #[display("Q")]
    Queen,
    #[display("K")]
    King,
}

impl Rank {
    /// 数値としてのランク (A = 1 ... K = 13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// `self` が `other` のちょうど 1 つ下か。場札に積めるかの判定に使う。
    pub fn is_one_below(self, other: Rank) -> bool {
        self.value() + 1 == other.value()
    }
}

/// 全スート。デッキ生成で使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// 全ランク (A → K の順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表すコンポーネントだよ！🃏
///
/// 位置 (`Position`) や所属する山 (`StackInfo`) は別のコンポーネントとして
/// 同じエンティティに付く。ここは「何のカードで、表か裏か」だけ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。デッキから作られた直後はみんな裏向き。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表にする。もう表なら何もしない。
    ///
    /// 1 回の配りの中で裏に戻ることはないので、裏返す操作は用意していないよ。
    pub fn flip_face_up(&mut self) {
        self.is_face_up = true;
    }

    /// "Q♥" みたいな短い表記。
    pub fn label(&self) -> String {
        format!("{}{}", self.rank, self.suit)
    }
}

impl Component for Card {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_face_down() {
        let card = Card::new(Suit::Spade, Rank::Ace);
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.is_face_up, "作った直後は裏向きのはず");
    }

    #[test]
    fn flip_face_up_is_idempotent() {
        let mut card = Card::new(Suit::Heart, Rank::Seven);
        card.flip_face_up();
        let once = card.clone();
        card.flip_face_up();

        assert!(card.is_face_up);
        assert_eq!(card, once, "2 回表にしても状態は変わらないはず");
    }

    #[test]
    fn rank_values_and_sequence() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert!(Rank::Queen.is_one_below(Rank::King));
        assert!(Rank::Ace.is_one_below(Rank::Two));
        assert!(!Rank::King.is_one_below(Rank::Queen));
        assert!(!Rank::Five.is_one_below(Rank::Five));
        assert!(!Rank::Three.is_one_below(Rank::Five));
    }

    #[test]
    fn all_ranks_are_ascending() {
        assert!(ALL_RANKS.windows(2).all(|w| w[0].is_one_below(w[1])));
    }

    #[test]
    fn label_uses_rank_and_suit_symbols() {
        assert_eq!(Card::new(Suit::Heart, Rank::Queen).label(), "Q♥");
        assert_eq!(Card::new(Suit::Club, Rank::Ten).label(), "10♣");
        assert!(Suit::Diamond.is_red());
        assert!(!Suit::Spade.is_red());
    }
}

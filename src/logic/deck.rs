// src/logic/deck.rs

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// `decks` 組分のカードを作るよ！🃏 全部裏向き。
///
/// 並びはデッキごとに スート → ランク の順。シャッフルは `shuffle_deck` で別にやる。
pub fn create_deck(decks: usize) -> Vec<Card> {
    iproduct!(0..decks, ALL_SUITS, ALL_RANKS)
        .map(|(_, suit, rank)| Card::new(suit, rank))
        .collect()
}

/// デッキをシャッフルする (Fisher–Yates なので全部の並びが同じ確率)。
///
/// 乱数生成器は呼び出し側から渡す。シード固定の `StdRng` を渡せば毎回同じ並びになるよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

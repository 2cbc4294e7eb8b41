// src/logic/mod.rs
//! ゲームのルールやデッキ操作みたいな、描画と関係ない純粋なロジック。

pub mod deck;
pub mod geometry;
pub mod rules;

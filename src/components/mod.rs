// src/components/mod.rs

pub mod card;
pub mod game_state;
pub mod position;
pub mod stack;
pub mod z_index;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use position::Position;
pub use stack::{PileId, PileKind, StackInfo};
pub use z_index::ZIndex;

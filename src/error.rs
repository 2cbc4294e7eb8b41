// src/error.rs
//! このクレートのエラー型。
//!
//! 置けない場所へのドロップはエラーじゃない (元の位置に戻るだけ)。
//! ここに来るのは、山の帳簿が壊れた時と JSON の読み書きに失敗した時だけ。

use derive_more::{Display, Error, From};

use crate::components::stack::PileId;
use crate::ecs::entity::Entity;

#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// どの山にも入っていないカードがある。
    #[display("card {entity:?} is not in any pile")]
    CardInNoPile { entity: Entity },

    /// 2 つ以上の山に入っているカードがある。
    #[display("card {entity:?} appears in {count} pile slots")]
    CardInManyPiles { entity: Entity, count: usize },

    /// 山の中身とカードの逆参照 (`StackInfo`) が食い違っている。
    #[display("card {entity:?} is in {actual} but its back-reference says {recorded:?}")]
    BackReferenceMismatch {
        entity: Entity,
        actual: PileId,
        recorded: Option<PileId>,
    },

    /// 山に入っているカードの総数がデッキの枚数と違う。
    #[display("piles hold {found} cards, expected {expected}")]
    CardCountMismatch { expected: usize, found: usize },

    /// JSON のシリアライズ / デシリアライズ失敗。
    #[display("json error: {_0}")]
    #[from]
    Json(#[error(source)] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = GameError::CardInNoPile { entity: Entity(4) };
        assert_eq!(err.to_string(), "card Entity(4) is not in any pile");

        let err = GameError::CardCountMismatch { expected: 52, found: 51 };
        assert_eq!(err.to_string(), "piles hold 51 cards, expected 52");
    }

    #[test]
    fn json_error_converts_with_question_mark() {
        fn parse(json: &str) -> Result<u32, GameError> {
            Ok(serde_json::from_str(json)?)
        }
        let err = parse("not json").expect_err("壊れた JSON はエラーのはず");
        assert!(matches!(err, GameError::Json(_)));
        assert!(std::error::Error::source(&err).is_some(), "元の serde エラーが source になるはず");
    }
}

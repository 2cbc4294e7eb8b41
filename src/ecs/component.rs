// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体が `World` に登録できる「データ部品」であることを示すマーカー。
/// `Debug` を要求しているのは、ログに中身を出したいから。
pub trait Component: std::fmt::Debug + 'static {}

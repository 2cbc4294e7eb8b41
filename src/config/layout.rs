// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! 座標はぜんぶウィンドウ座標 (左上原点、y は下向き)、カードや山は中心の位置で持つ。

pub const CARD_WIDTH: f32 = 84.0; // カードの幅
pub const CARD_HEIGHT: f32 = 114.0; // カードの高さ

/// 山の下に敷くマット (空の山の目印) はカードよりひと回り大きい。
pub const MAT_PERCENT_OVERSIZE: f32 = 1.25;
pub const MAT_WIDTH: f32 = CARD_WIDTH * MAT_PERCENT_OVERSIZE;
pub const MAT_HEIGHT: f32 = CARD_HEIGHT * MAT_PERCENT_OVERSIZE;

// マット同士の余白 (マットの大きさに対する割合)
pub const VERTICAL_MARGIN_PERCENT: f32 = 0.10;
pub const HORIZONTAL_MARGIN_PERCENT: f32 = 0.10;

// --- 各段の基準位置 ---
pub const START_X: f32 = MAT_WIDTH / 2.0 + MAT_WIDTH * HORIZONTAL_MARGIN_PERCENT; // 左端の山の X
pub const X_SPACING: f32 = MAT_WIDTH + MAT_WIDTH * HORIZONTAL_MARGIN_PERCENT; // 山と山の X 間隔
pub const TOP_Y: f32 = MAT_HEIGHT / 2.0 + MAT_HEIGHT * VERTICAL_MARGIN_PERCENT; // 上段の Y
pub const MIDDLE_Y: f32 = TOP_Y + MAT_HEIGHT + MAT_HEIGHT * VERTICAL_MARGIN_PERCENT; // 中段の Y

/// 場札で重ねたカード同士の縦のずれ。
pub const CARD_VERTICAL_OFFSET: f32 = CARD_HEIGHT * 0.3;

/// 下段の Y はウィンドウの高さで決まる。
pub fn bottom_y(screen_height: f32) -> f32 {
    screen_height - MAT_HEIGHT / 2.0 - MAT_HEIGHT * VERTICAL_MARGIN_PERCENT
}

/// i 番目 (0 始まり) の列の X。
pub fn column_x(column: usize) -> f32 {
    START_X + column as f32 * X_SPACING
}

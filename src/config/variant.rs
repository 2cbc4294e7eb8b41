// src/config/variant.rs
//! 遊び方 (バリアント) ごとの設定と、フロントエンドから渡されるゲーム設定。

use serde::{Deserialize, Serialize};

/// 山札をクリックした時の配り方。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockRule {
    /// 山札の一番上を 1 枚表にして、枚数が一番少ない場札 (同数なら左) に置く。
    DealOne,
    /// 空でない場札それぞれに、左から順に 1 枚ずつ表向きで配る。
    DealRow,
}

/// ゲームのバリアント。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// 1 デッキ、場札 7 列 (i 列目に i 枚)、組札 4 つ。
    #[default]
    Klondike,
    /// 2 デッキ、場札 10 列 (左 5 列に 6 枚、右 5 列に 5 枚)、組札なし。
    TenPile,
}

impl Variant {
    /// 使うデッキの数。
    pub fn deck_count(self) -> usize {
        match self {
            Variant::Klondike => 1,
            Variant::TenPile => 2,
        }
    }

    /// 全カード枚数。
    pub fn card_count(self) -> usize {
        self.deck_count() * 52
    }

    /// 場札それぞれに最初に配る枚数 (左から)。一番上だけ表になる。
    pub fn tableau_deal(self) -> Vec<usize> {
        match self {
            Variant::Klondike => (1..=7).collect(),
            Variant::TenPile => [6, 6, 6, 6, 6, 5, 5, 5, 5, 5].to_vec(),
        }
    }

    pub fn tableau_count(self) -> usize {
        self.tableau_deal().len()
    }

    pub fn foundation_count(self) -> usize {
        match self {
            Variant::Klondike => 4,
            Variant::TenPile => 0,
        }
    }

    pub fn stock_rule(self) -> StockRule {
        match self {
            Variant::Klondike => StockRule::DealOne,
            Variant::TenPile => StockRule::DealRow,
        }
    }

    /// ウィンドウの論理サイズ (幅, 高さ)。
    pub fn window_size(self) -> (f32, f32) {
        match self {
            Variant::Klondike => (1024.0, 768.0),
            Variant::TenPile => (1280.0, 768.0),
        }
    }
}

/// ゲーム設定。JS 側からは JSON で渡ってくる (足りない項目はデフォルト)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: Variant,
    /// シャッフルのシード。`None` なら毎回ランダム。
    pub seed: Option<u64>,
    /// リスタートに割り当てるキー (大文字小文字は区別しない)。
    pub restart_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seed: None,
            restart_key: "r".to_string(),
        }
    }
}

impl GameConfig {
    pub fn new(variant: Variant) -> Self {
        Self { variant, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// JSON から読み込む。空文字列ならデフォルト設定。
    pub fn from_json(json: &str) -> Result<Self, crate::error::GameError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// キーコードがリスタートキーか。
    pub fn is_restart_key(&self, code: &str) -> bool {
        code.eq_ignore_ascii_case(&self.restart_key)
    }
}

// src/config/mod.rs

pub mod layout;
pub mod variant;

pub use variant::{GameConfig, StockRule, Variant};

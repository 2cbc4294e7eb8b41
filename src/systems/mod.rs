// src/systems/mod.rs
//! 盤面全体に作用するシステムたち。

pub mod deal_system;

pub use deal_system::DealInitialCardsSystem;

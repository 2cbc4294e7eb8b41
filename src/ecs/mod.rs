//! ECS (Entity-Component-System) core implementation.
//!
//! カードの状態はぜんぶコンポーネントとして `World` に入る。
//! ロジック側 (`logic`, `systems`, `app`) は `World` 経由でそれを読み書きするよ。

pub mod component;
pub mod entity;
pub mod world;

#[cfg(test)]
mod world_tests;

// Re-export key types for easier use via `crate::ecs::X`
pub use component::Component;
pub use entity::Entity;
pub use world::World;

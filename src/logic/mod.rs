// src/logic/mod.rs
//! World に依存しない計算ロジック。システムから呼ばれる。

pub mod animation;
pub mod bounds;
pub mod movement;
pub mod physics;

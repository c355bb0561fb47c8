// src/systems/mod.rs
//! シーンが毎フレーム回すシステムたち。順番は 移動 → 物理 → アニメーション。

pub mod animation_system;
pub mod movement_control_system;
pub mod physics_system;

pub use animation_system::AnimationSystem;
pub use movement_control_system::MovementControlSystem;
pub use physics_system::PhysicsSystem;

// src/components/mod.rs

pub mod animation_player;
pub mod body;
pub mod player;
pub mod position;
pub mod sprite;
pub mod velocity;

pub use animation_player::AnimationPlayer;
pub use body::{Blocked, PhysicsBody};
pub use player::Player;
pub use position::Position;
pub use sprite::Sprite;
pub use velocity::Velocity;

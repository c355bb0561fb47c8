// src/components/velocity.rs

use serde::{Deserialize, Serialize};

use crate::component::Component;

/// 速度 (units/s) のコンポーネント。🏃💨
/// 横はコントローラーが毎フレーム決め直して、縦は重力とジャンプで変わる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Component for Velocity {}

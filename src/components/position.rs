// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::component::Component;

/// 2D空間での位置を表すコンポーネントだよ！ (x, y) 座標を持つよ。📍
///
/// 座標はスプライトの中心。画面座標なので y は下向きがプラス。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Component for Position {}

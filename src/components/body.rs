// src/components/body.rs

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::config::scene::{
    BODY_HEIGHT_FACTOR, BODY_OFFSET_X_FACTOR, BODY_OFFSET_Y_FACTOR, BODY_WIDTH_FACTOR,
};

/// どの方向が壁 (ワールドの端) にぶつかっているか。物理ステップごとに更新。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocked {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// 物理ボディ (当たり判定の四角) のコンポーネントだよ！📦
///
/// サイズとオフセットはスプライトの表示サイズに対する割合で持つ。
/// オフセットはスプライトの左上から測る。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub width_factor: f32,
    pub height_factor: f32,
    pub offset_x_factor: f32,
    pub offset_y_factor: f32,
    pub collide_world_bounds: bool,
    pub allow_gravity: bool,
    pub blocked: Blocked,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            width_factor: BODY_WIDTH_FACTOR,
            height_factor: BODY_HEIGHT_FACTOR,
            offset_x_factor: BODY_OFFSET_X_FACTOR,
            offset_y_factor: BODY_OFFSET_Y_FACTOR,
            collide_world_bounds: true,
            allow_gravity: true,
            blocked: Blocked::default(),
        }
    }
}

impl Component for PhysicsBody {}

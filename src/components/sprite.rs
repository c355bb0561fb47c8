// src/components/sprite.rs

use serde::{Deserialize, Serialize};

use crate::component::Component;

/// スプライトシートを使って描画されるキャラクターの見た目だよ！🖼️
///
/// - `frame_width` / `frame_height`: シート1コマの元のサイズ
/// - `scale`: 表示倍率。見た目と当たり判定の両方にかかる
/// - `facing_left`: true なら左右反転して描く
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub texture_key: String,
    pub frame_width: f32,
    pub frame_height: f32,
    pub scale: f32,
    pub facing_left: bool,
}

impl Sprite {
    pub fn new(texture_key: &str, frame_width: f32, frame_height: f32, scale: f32) -> Self {
        Self {
            texture_key: texture_key.to_string(),
            frame_width,
            frame_height,
            scale,
            facing_left: false,
        }
    }

    pub fn display_width(&self) -> f32 {
        self.frame_width * self.scale
    }

    pub fn display_height(&self) -> f32 {
        self.frame_height * self.scale
    }

    /// 画面端の判定に使う、見た目の半分の幅
    pub fn half_width(&self) -> f32 {
        self.frame_width * 0.5 * self.scale
    }
}

impl Component for Sprite {}

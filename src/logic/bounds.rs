// src/logic/bounds.rs

use serde::Serialize;

/// ワールドの大きさと、接地判定・重力の定数をまとめたもの。
/// 毎フレームのロジックには引数で渡すよ（グローバルな状態は読まない）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    /// y がこれより大きければ「接地」扱い (画面座標なので下向きがプラス)
    pub ground_y: f32,
    /// 物理ステップがかける重力 (units/s²)。コントローラーは使わない。
    pub gravity_y: f32,
}

impl WorldBounds {
    /// 位置だけで見る接地判定。y は小数点以下を切り捨ててから比べる。
    pub fn is_grounded(&self, y: f32) -> bool {
        y.floor() > self.ground_y
    }
}

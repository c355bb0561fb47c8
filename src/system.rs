// src/system.rs

use crate::world::World;

/// System（システム）トレイトだよ！
///
/// システムはシーンのロジック（移動、物理、アニメーション…）を実行する役割を持つんだ。
/// シーンの `update` から毎フレーム決まった順番で呼び出されて、
/// World の中のコンポーネントを読み取ったり、変更したりする。
///
/// `delta_seconds` はこのフレームの経過時間（秒）。0 のフレームもあり得るよ。
pub trait System {
    fn run(&mut self, world: &mut World, delta_seconds: f32);
}

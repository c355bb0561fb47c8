// src/scene/mod.rs
//! シーンのライフサイクル。
//!
//! シーンは `create()` を一回、そのあと `update()` を毎フレーム呼ばれる。
//! `update()` は次に進むシーンがあれば `SceneTransition::Start` で教えてくれるので、
//! 切り替え自体は呼び出し側 (GameApp) がやる。

pub mod gameplay_scene;

pub use gameplay_scene::GameplayScene;

use serde::Serialize;

use crate::input::InputSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SceneTransition {
    /// このシーンを続ける
    Continue,
    /// 指定したキーのシーンを開始する
    Start(String),
}

pub trait Scene {
    fn key(&self) -> &str;

    fn create(&mut self);

    /// 1フレーム進める。
    ///
    /// - `input`: このフレームの方向キー
    /// - `exit_requested`: Escape が押されたか (フレームに1回だけ確認)
    /// - `delta_seconds`: 前のフレームからの経過時間
    fn update(
        &mut self,
        input: &InputSnapshot,
        exit_requested: bool,
        delta_seconds: f32,
    ) -> SceneTransition;
}

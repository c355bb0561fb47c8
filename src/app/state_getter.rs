// src/app/state_getter.rs
//! シーンの状態を JSON 文字列にして JS 側に渡すためのヘルパーだよ！
//! デバッグ表示用。create 前なら "null"。

use serde::Serialize;

use crate::input::InputSnapshot;
use crate::scene::gameplay_scene::{GameplayScene, PlayerSnapshot};

#[derive(Debug, Serialize)]
struct SceneStateData<'a> {
    scene: &'a str,
    player: Option<PlayerSnapshot>,
    input: InputSnapshot,
    pending_transition: Option<&'a str>,
}

pub(crate) fn get_scene_state_json(
    scene_key: &str,
    scene: &GameplayScene,
    input: InputSnapshot,
    pending_transition: Option<&str>,
) -> Result<String, String> {
    let data = SceneStateData {
        scene: scene_key,
        player: scene.player_snapshot(),
        input,
        pending_transition,
    };
    serde_json::to_string(&data).map_err(|e| format!("Failed to serialize scene state: {}", e))
}

pub(crate) fn get_player_state_json(scene: &GameplayScene) -> Result<String, String> {
    serde_json::to_string(&scene.player_snapshot())
        .map_err(|e| format!("Failed to serialize player state: {}", e))
}

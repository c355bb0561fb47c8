// src/config/scene_config.rs

use serde::{Deserialize, Serialize};

use super::scene::*;
use crate::logic::bounds::WorldBounds;

/// ゲームプレイシーンの設定だよ！
///
/// デフォルト値は `config::scene` の定数そのまま。
/// JS から JSON を渡すと、書いてあるフィールドだけ上書きできる (`#[serde(default)]`)。
///
/// ```json
/// { "player_speed": 200.0, "frame_width": 300.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub ground_y: f32,
    pub gravity_y: f32,
    pub player_speed: f32,
    pub jump_velocity: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_scale: f32,
    pub frame_width: f32,
    pub frame_height: f32,
    pub walk_frame_count: usize,
    pub walk_frame_rate: f32,
    /// 歩きアニメの繰り返し回数。マイナスならずっとループ
    pub walk_repeat: i32,
    /// Escape で切り替わる先のシーンのキー
    pub next_scene: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_y: GROUND_Y,
            gravity_y: GRAVITY_Y,
            player_speed: PLAYER_SPEED,
            jump_velocity: JUMP_VELOCITY,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_scale: PLAYER_SCALE,
            frame_width: SPRITE_FRAME_WIDTH,
            frame_height: SPRITE_FRAME_HEIGHT,
            walk_frame_count: WALK_FRAME_COUNT,
            walk_frame_rate: WALK_FRAME_RATE,
            walk_repeat: WALK_REPEAT,
            next_scene: GAME_OVER_SCENE_KEY.to_string(),
        }
    }
}

impl SceneConfig {
    /// JSON 文字列から設定を作るよ。パースに失敗したり、値がおかしかったら Err。
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse scene config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// 0 以下だと計算が壊れる値をチェックする。
    pub fn validate(&self) -> Result<(), String> {
        let positives = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_scale", self.player_scale),
            ("frame_width", self.frame_width),
            ("frame_height", self.frame_height),
            ("walk_frame_rate", self.walk_frame_rate),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        if self.walk_frame_count == 0 {
            return Err("walk_frame_count must be at least 1".to_string());
        }
        if self.next_scene.trim().is_empty() {
            return Err("next_scene must not be empty".to_string());
        }
        Ok(())
    }

    /// プレイヤーの見た目の半分の幅 (スケール込み)。画面端の判定に使う。
    pub fn half_width(&self) -> f32 {
        self.frame_width * 0.5 * self.player_scale
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds {
            width: self.world_width,
            height: self.world_height,
            ground_y: self.ground_y,
            gravity_y: self.gravity_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_scene_constants() {
        let config = SceneConfig::default();
        assert_eq!(config.world_width, 1200.0);
        assert_eq!(config.ground_y, 480.0);
        assert_eq!(config.gravity_y, 300.0);
        assert_eq!(config.player_speed, 160.0);
        assert_eq!(config.jump_velocity, -330.0);
        assert_eq!(config.next_scene, "GameOverScene");
        assert_eq!(config.half_width(), 64.0, "256 * 0.5 * 0.5 = 64 のはず");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = SceneConfig::from_json(r#"{ "player_speed": 200.0, "frame_width": 300.0 }"#)
            .expect("partial config should parse");
        assert_eq!(config.player_speed, 200.0);
        assert_eq!(config.frame_width, 300.0);
        assert_eq!(config.world_width, WORLD_WIDTH);
        assert_eq!(config.half_width(), 75.0);
    }

    #[test]
    fn invalid_json_and_values_are_rejected() {
        assert!(SceneConfig::from_json("{ not json").is_err());

        let err = SceneConfig::from_json(r#"{ "player_scale": 0.0 }"#).unwrap_err();
        assert!(err.contains("player_scale"), "エラーにフィールド名が入ってるはず: {}", err);

        let err = SceneConfig::from_json(r#"{ "walk_frame_count": 0 }"#).unwrap_err();
        assert!(err.contains("walk_frame_count"));

        assert!(SceneConfig::from_json(r#"{ "next_scene": "  " }"#).is_err());
    }

    #[test]
    fn bounds_are_built_from_config() {
        let config = SceneConfig::default();
        let bounds = config.bounds();
        assert_eq!(bounds.width, 1200.0);
        assert_eq!(bounds.height, 600.0);
        assert_eq!(bounds.ground_y, 480.0);
        assert_eq!(bounds.gravity_y, 300.0);
    }
}
